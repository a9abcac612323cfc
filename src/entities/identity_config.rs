use serde::{Deserialize, Serialize};

/// Discord credentials and display overrides, stored as `discord-config.json`.
///
/// `user_id` is the account id and `bot_token` the access token used to reach
/// the Discord API. The remaining fields are optional overrides; an empty
/// string means "not set".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdentityConfig {
    pub user_id: String,
    pub bot_token: String,
    pub display_name: String,
    pub avatar_url: String,
    pub status: String,
    pub custom_status: String,
}

impl IdentityConfig {
    pub fn has_credentials(&self) -> bool {
        !self.user_id.is_empty() && !self.bot_token.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Online,
    Idle,
    Dnd,
    Offline,
}

impl Presence {
    pub const ALL: [Presence; 4] = [
        Presence::Online,
        Presence::Idle,
        Presence::Dnd,
        Presence::Offline,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "online" => Some(Presence::Online),
            "idle" => Some(Presence::Idle),
            "dnd" => Some(Presence::Dnd),
            "offline" => Some(Presence::Offline),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Idle => "idle",
            Presence::Dnd => "dnd",
            Presence::Offline => "offline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Presence::Online => "Online",
            Presence::Idle => "Idle",
            Presence::Dnd => "Do Not Disturb",
            Presence::Offline => "Offline",
        }
    }
}

/// Profile fetched live from Discord. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub username: String,
    pub discriminator: String,
    pub avatar_url: Option<String>,
    pub status: Option<String>,
}

impl ResolvedIdentity {
    /// Fills the fields Discord left empty from the stored config.
    pub fn with_fallback(mut self, config: &IdentityConfig) -> Self {
        if self.avatar_url.as_deref().map_or(true, str::is_empty) && !config.avatar_url.is_empty()
        {
            self.avatar_url = Some(config.avatar_url.clone());
        }
        if self.status.as_deref().map_or(true, str::is_empty) && !config.status.is_empty() {
            self.status = Some(config.status.clone());
        }
        self
    }
}
