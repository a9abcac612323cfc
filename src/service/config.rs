use std::{env, path::PathBuf, sync::Arc};

use crate::config::Config;

pub trait ConfigService: Send + Sync {
    fn port(&self) -> u16;
    fn values(&self) -> &Config;

    /// Strict equality against the configured admin pair.
    fn admin_credentials_match(&self, username: &str, password: &str) -> bool {
        let config = self.values();
        match (&config.admin_username, &config.admin_password) {
            (Some(expected_user), Some(expected_password)) => {
                username == expected_user && password == expected_password
            }
            _ => false,
        }
    }
}

pub struct ConfigServiceImpl {
    config: Arc<Config>,
}

impl ConfigServiceImpl {
    fn strip_wrapping_quotes(value: &str) -> &str {
        if value.len() >= 2 {
            let bytes = value.as_bytes();
            let first = bytes[0];
            let last = bytes[value.len() - 1];
            if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
                return &value[1..value.len() - 1];
            }
        }
        value
    }

    fn normalize(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        let normalized = Self::strip_wrapping_quotes(trimmed).trim();
        if normalized.is_empty() {
            None
        } else {
            Some(normalized.to_string())
        }
    }

    fn env_nonempty(key: &str) -> Option<String> {
        env::var(key).ok().and_then(|value| Self::normalize(&value))
    }

    fn env_u16(key: &str) -> Option<u16> {
        Self::env_nonempty(key).and_then(|value| value.parse::<u16>().ok())
    }

    fn env_u64(key: &str) -> Option<u64> {
        Self::env_nonempty(key).and_then(|value| value.parse::<u64>().ok())
    }

    fn env_bool(key: &str, default: bool) -> bool {
        Self::env_nonempty(key)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(default)
    }

    /// Splits a comma separated list, dropping blank entries.
    pub fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn new() -> Self {
        let defaults = Config::default();

        let port = Self::env_u16("PORT").unwrap_or(defaults.port);
        let data_dir = Self::env_nonempty("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let admin_username = Self::env_nonempty("ADMIN_USERNAME");
        let admin_password = Self::env_nonempty("ADMIN_PASSWORD");
        let session_secret = Self::env_nonempty("SESSION_SECRET");
        let production = Self::env_nonempty("APP_ENV")
            .map(|value| value.eq_ignore_ascii_case("production"))
            .unwrap_or(false);
        let cookie_secure = Self::env_bool("COOKIE_SECURE", production);
        let github_account =
            Self::env_nonempty("GITHUB_ACCOUNT").unwrap_or(defaults.github_account);
        let github_api_base =
            Self::env_nonempty("GITHUB_API_BASE").unwrap_or(defaults.github_api_base);
        let discord_api_base =
            Self::env_nonempty("DISCORD_API_BASE").unwrap_or(defaults.discord_api_base);
        let webhook_urls = Self::env_nonempty("DISCORD_COMMENT_WEBHOOK_URLS")
            .map(|value| Self::split_list(&value))
            .unwrap_or_default();
        let http_timeout_seconds =
            Self::env_u64("HTTP_TIMEOUT_SECONDS").unwrap_or(defaults.http_timeout_seconds);

        Self::from_config(Config {
            port,
            data_dir,
            admin_username,
            admin_password,
            session_secret,
            cookie_secure,
            github_account,
            github_api_base,
            discord_api_base,
            webhook_urls,
            http_timeout_seconds,
        })
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for ConfigServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for ConfigServiceImpl {
    fn port(&self) -> u16 {
        self.config.port
    }

    fn values(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quotes_and_whitespace() {
        assert_eq!(
            ConfigServiceImpl::normalize("  \"secret\" "),
            Some("secret".to_string())
        );
        assert_eq!(ConfigServiceImpl::normalize("''"), None);
        assert_eq!(ConfigServiceImpl::normalize("   "), None);
    }

    #[test]
    fn webhook_list_drops_blank_entries() {
        let urls = ConfigServiceImpl::split_list("https://a.test/1, ,https://b.test/2,");
        assert_eq!(urls, vec!["https://a.test/1", "https://b.test/2"]);
        assert!(ConfigServiceImpl::split_list(" , ").is_empty());
    }

    #[test]
    fn admin_login_requires_both_values_configured() {
        let unset = ConfigServiceImpl::from_config(Config::default());
        assert!(!unset.admin_credentials_match("", ""));

        let set = ConfigServiceImpl::from_config(Config {
            admin_username: Some("playfairs".into()),
            admin_password: Some("8462PlayfairDisplay.cc".into()),
            ..Config::default()
        });
        assert!(set.admin_credentials_match("playfairs", "8462PlayfairDisplay.cc"));
        assert!(!set.admin_credentials_match("playfairs", "8462playfairdisplay.cc"));
        assert!(!set.admin_credentials_match("Playfairs", "8462PlayfairDisplay.cc"));
    }
}
