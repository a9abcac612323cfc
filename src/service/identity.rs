use async_trait::async_trait;
use reqwest::{header, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::entities::identity_config::ResolvedIdentity;

const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Every failure collapses into this one variant so callers cannot tell a
/// bad token from an unknown id or a network problem.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("failed to authenticate with discord")]
    Authentication,
}

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(
        &self,
        account_id: &str,
        access_token: &str,
    ) -> Result<ResolvedIdentity, IdentityError>;
}

#[derive(Debug, thiserror::Error)]
enum CallError {
    #[error("client build failed: {0}")]
    Client(reqwest::Error),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },
}

#[derive(Deserialize)]
struct DiscordUser {
    id: String,
    username: String,
    #[serde(default)]
    discriminator: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    // Only present when the payload comes through a presence-aware proxy.
    #[serde(default)]
    presence: Option<DiscordPresence>,
}

#[derive(Deserialize)]
struct DiscordPresence {
    status: Option<String>,
}

impl DiscordUser {
    fn avatar_url(&self) -> Option<String> {
        let hash = self.avatar.as_deref()?;
        let ext = if hash.starts_with("a_") { "gif" } else { "png" };
        Some(format!("{}/avatars/{}/{}.{}", CDN_BASE, self.id, hash, ext))
    }

    fn into_identity(self) -> ResolvedIdentity {
        let avatar_url = self.avatar_url();
        ResolvedIdentity {
            discriminator: self.discriminator.unwrap_or_else(|| "0".to_string()),
            status: self.presence.and_then(|presence| presence.status),
            username: self.username,
            avatar_url,
        }
    }
}

/// A single authenticated client, opened for one resolution and closed after it.
struct DiscordSession {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl DiscordSession {
    async fn open(api_base: &str, token: &str, timeout: Duration) -> Result<Self, CallError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(CallError::Client)?;
        let session = Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.to_string(),
        };
        session.get("/users/@me", "users/@me").await?;
        Ok(session)
    }

    async fn get(&self, path: &str, endpoint: &'static str) -> Result<reqwest::Response, CallError> {
        let response = self
            .client
            .get(format!("{}{}", self.api_base, path))
            .header(header::AUTHORIZATION, &self.token)
            .header(header::USER_AGENT, "biolink")
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CallError::Status {
                endpoint,
                status: response.status(),
            });
        }
        Ok(response)
    }

    async fn fetch_user(&self, account_id: &str) -> Result<DiscordUser, CallError> {
        let response = self
            .get(&format!("/users/{}", urlencoding::encode(account_id)), "users/{id}")
            .await?;
        Ok(response.json::<DiscordUser>().await?)
    }

    fn close(self) {
        drop(self.client);
    }
}

pub struct DiscordIdentityResolver {
    api_base: String,
    timeout: Duration,
}

impl DiscordIdentityResolver {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_base: api_base.into(),
            timeout,
        }
    }
}

#[async_trait]
impl IdentityResolver for DiscordIdentityResolver {
    async fn resolve(
        &self,
        account_id: &str,
        access_token: &str,
    ) -> Result<ResolvedIdentity, IdentityError> {
        let session = DiscordSession::open(&self.api_base, access_token, self.timeout)
            .await
            .map_err(|err| {
                tracing::debug!(error = %err, "discord login failed");
                IdentityError::Authentication
            })?;

        let user = session.fetch_user(account_id).await;
        session.close();

        user.map(DiscordUser::into_identity).map_err(|err| {
            tracing::debug!(error = %err, account_id, "discord user fetch failed");
            IdentityError::Authentication
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(avatar: Option<&str>) -> DiscordUser {
        DiscordUser {
            id: "123456789012345678".into(),
            username: "playfairs".into(),
            discriminator: None,
            avatar: avatar.map(str::to_string),
            presence: None,
        }
    }

    #[test]
    fn static_avatar_uses_png() {
        assert_eq!(
            user(Some("abc")).avatar_url().as_deref(),
            Some("https://cdn.discordapp.com/avatars/123456789012345678/abc.png")
        );
    }

    #[test]
    fn animated_avatar_uses_gif() {
        assert!(user(Some("a_abc")).avatar_url().unwrap().ends_with("a_abc.gif"));
    }

    #[test]
    fn missing_discriminator_becomes_zero() {
        let identity = user(None).into_identity();
        assert_eq!(identity.discriminator, "0");
        assert_eq!(identity.avatar_url, None);
        assert_eq!(identity.status, None);
    }

    #[tokio::test]
    async fn unreachable_api_is_an_authentication_failure() {
        let resolver = DiscordIdentityResolver::new("http://127.0.0.1:9", Duration::from_secs(2));
        assert_eq!(
            resolver.resolve("123456789012345678", "token").await,
            Err(IdentityError::Authentication)
        );
    }
}
