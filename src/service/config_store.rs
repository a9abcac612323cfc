use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    entities::{
        identity_config::{IdentityConfig, Presence},
        site_config::SiteConfig,
    },
    repo::documents::{DocumentStore, StoreError},
    service::{
        identity::IdentityResolver,
        validation::{is_account_id, min_chars, FieldErrors, MIN_ACCESS_TOKEN_LEN},
    },
};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("validation failed")]
    Invalid(FieldErrors),
    #[error("identity credentials were rejected")]
    Authentication,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Load never fails; save validates before anything is written.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn load_site_config(&self) -> SiteConfig;
    async fn save_site_config(&self, config: SiteConfig) -> Result<SiteConfig, SaveError>;
    async fn load_identity_config(&self) -> IdentityConfig;
    async fn save_identity_config(&self, config: IdentityConfig)
        -> Result<IdentityConfig, SaveError>;
}

pub struct ConfigStoreImpl {
    documents: Arc<dyn DocumentStore>,
    identity: Arc<dyn IdentityResolver>,
}

impl ConfigStoreImpl {
    pub fn new(documents: Arc<dyn DocumentStore>, identity: Arc<dyn IdentityResolver>) -> Self {
        Self {
            documents,
            identity,
        }
    }

    fn validate_site(config: SiteConfig) -> Result<SiteConfig, FieldErrors> {
        let config = SiteConfig {
            title: config.title.trim().to_string(),
            subtitle: config.subtitle.trim().to_string(),
            ..config
        };

        let mut errors = FieldErrors::new();
        if !min_chars(&config.title, 3) {
            errors.insert("title", "Title must be at least 3 characters long");
        }
        if !min_chars(&config.subtitle, 10) {
            errors.insert("subtitle", "Subtitle must be at least 10 characters long");
        }
        errors.into_result(config)
    }

    fn validate_identity(config: IdentityConfig) -> Result<IdentityConfig, FieldErrors> {
        let config = IdentityConfig {
            user_id: config.user_id.trim().to_string(),
            bot_token: config.bot_token.trim().to_string(),
            display_name: config.display_name.trim().to_string(),
            avatar_url: config.avatar_url.trim().to_string(),
            status: config.status.trim().to_string(),
            custom_status: config.custom_status.trim().to_string(),
        };

        let mut errors = FieldErrors::new();
        if !is_account_id(&config.user_id) {
            errors.insert(
                "userId",
                "Invalid Discord User ID. Must be a 17-19 digit number.",
            );
        }
        if config.bot_token.chars().count() < MIN_ACCESS_TOKEN_LEN {
            errors.insert(
                "botToken",
                "Invalid Bot Token. Please provide a valid token.",
            );
        }
        let display_len = config.display_name.chars().count();
        if display_len > 0 && !(2..=32).contains(&display_len) {
            errors.insert(
                "displayName",
                "Display name must be between 2 and 32 characters.",
            );
        }
        if !config.status.is_empty() && Presence::parse(&config.status).is_none() {
            errors.insert("status", "Unknown status.");
        }
        errors.into_result(config)
    }
}

#[async_trait]
impl ConfigStore for ConfigStoreImpl {
    async fn load_site_config(&self) -> SiteConfig {
        self.documents.read_site().await.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "using default site config");
            SiteConfig::default()
        })
    }

    async fn save_site_config(&self, config: SiteConfig) -> Result<SiteConfig, SaveError> {
        let config = Self::validate_site(config).map_err(SaveError::Invalid)?;
        self.documents.write_site(&config).await?;
        tracing::info!(title = %config.title, "site config saved");
        Ok(config)
    }

    async fn load_identity_config(&self) -> IdentityConfig {
        self.documents.read_identity().await.unwrap_or_else(|err| {
            tracing::debug!(error = %err, "using default identity config");
            IdentityConfig::default()
        })
    }

    async fn save_identity_config(
        &self,
        config: IdentityConfig,
    ) -> Result<IdentityConfig, SaveError> {
        let mut config = Self::validate_identity(config).map_err(SaveError::Invalid)?;

        let live = self
            .identity
            .resolve(&config.user_id, &config.bot_token)
            .await
            .map_err(|_| SaveError::Authentication)?;

        if config.display_name.is_empty() {
            config.display_name = live.username;
        }
        if config.avatar_url.is_empty() {
            config.avatar_url = live.avatar_url.unwrap_or_default();
        }
        if config.status.is_empty() {
            config.status = live.status.unwrap_or_default();
        }

        self.documents.write_identity(&config).await?;
        tracing::info!(user_id = %config.user_id, "identity config saved");
        Ok(config)
    }
}
