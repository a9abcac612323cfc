use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A validated submission of the public contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Body posted to each webhook: a Discord-compatible embed list.
#[derive(Clone, Debug, Serialize)]
pub struct Notification {
    pub embeds: Vec<Embed>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub timestamp: String,
    pub footer: EmbedFooter,
}

#[derive(Clone, Debug, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

pub const NOTIFICATION_TITLE: &str = "New Website Message";
pub const NOTIFICATION_COLOR: u32 = 0x2563EB;
pub const NOTIFICATION_FOOTER: &str = "Biolink Website Message";

impl Notification {
    pub fn for_message(message: &ContactMessage, sent_at: DateTime<Utc>) -> Self {
        let field = |name: &str, value: &str, inline: bool| EmbedField {
            name: name.to_string(),
            value: value.to_string(),
            inline,
        };
        Self {
            embeds: vec![Embed {
                title: NOTIFICATION_TITLE.to_string(),
                color: NOTIFICATION_COLOR,
                fields: vec![
                    field("Name", &message.name, true),
                    field("Email", &message.email, true),
                    field("Message", &message.message, false),
                ],
                timestamp: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                footer: EmbedFooter {
                    text: NOTIFICATION_FOOTER.to_string(),
                },
            }],
        }
    }
}
