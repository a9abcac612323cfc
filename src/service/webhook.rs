use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use crate::entities::contact::Notification;

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("webhook returned {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

#[async_trait]
pub trait WebhookNotifier: Send + Sync {
    async fn send(&self, url: &str, notification: &Notification) -> Result<(), WebhookError>;
}

pub struct DiscordWebhookNotifier {
    client: reqwest::Client,
}

impl DiscordWebhookNotifier {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookNotifier for DiscordWebhookNotifier {
    async fn send(&self, url: &str, notification: &Notification) -> Result<(), WebhookError> {
        let res = self.client.post(url).json(notification).send().await?;

        // Discord answers 204 without `?wait=true`, 200 with it.
        if res.status().is_success() {
            return Ok(());
        }

        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        Err(WebhookError::Rejected { status, body })
    }
}
