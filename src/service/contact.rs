use chrono::Utc;
use serde::Deserialize;

use crate::{
    entities::contact::{ContactMessage, Notification},
    service::{
        validation::{is_email, min_chars, FieldErrors},
        webhook::{WebhookError, WebhookNotifier},
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("no webhook urls configured")]
    NoWebhooks,
    /// `index` is also the number of webhooks that were already notified.
    #[error("delivery to webhook #{index} failed: {source}")]
    Delivery { index: usize, source: WebhookError },
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactMessage, FieldErrors> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        let mut errors = FieldErrors::new();
        if !min_chars(name, 2) {
            errors.insert("name", "Name must be at least 2 characters long");
        }
        if !is_email(email) {
            errors.insert("email", "Please enter a valid email address");
        }
        if !min_chars(message, 10) {
            errors.insert("message", "Message must be at least 10 characters long");
        }

        errors.into_result(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// Sends one notification to each url in order and stops at the first
/// failure. Deliveries that already went out stay delivered.
pub async fn deliver(
    notifier: &dyn WebhookNotifier,
    urls: &[String],
    message: &ContactMessage,
) -> Result<usize, ContactError> {
    if urls.is_empty() {
        return Err(ContactError::NoWebhooks);
    }

    let notification = Notification::for_message(message, Utc::now());
    for (index, url) in urls.iter().enumerate() {
        notifier
            .send(url, &notification)
            .await
            .map_err(|source| ContactError::Delivery { index, source })?;
    }
    Ok(urls.len())
}
