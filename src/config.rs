use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,

    // Admin login. When either is missing every login attempt is rejected.
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,

    pub session_secret: Option<String>,
    pub cookie_secure: bool,

    pub github_account: String,
    pub github_api_base: String,
    pub discord_api_base: String,
    pub webhook_urls: Vec<String>,
    pub http_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            data_dir: PathBuf::from("data"),
            admin_username: None,
            admin_password: None,
            session_secret: None,
            cookie_secure: false,
            github_account: "playfairs".to_string(),
            github_api_base: "https://api.github.com".to_string(),
            discord_api_base: "https://discord.com/api/v10".to_string(),
            webhook_urls: Vec::new(),
            http_timeout_seconds: 10,
        }
    }
}
