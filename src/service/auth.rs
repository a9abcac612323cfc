use std::sync::Arc;

use crate::service::{
    config::ConfigService,
    session::{Session, SessionService, IS_ADMIN},
};

pub const INVALID_CREDENTIALS: &str = "Invalid admin credentials";

#[derive(Debug, PartialEq, Eq)]
pub struct AuthError {
    pub code: &'static str,
    pub message: String,
}

impl AuthError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub trait AuthService: Send + Sync {
    /// Both fields are checked together so the error never says which one was wrong.
    fn login(&self, username: &str, password: &str) -> Result<Session, AuthError>;
}

pub struct AuthServiceImpl {
    config: Arc<dyn ConfigService>,
    sessions: Arc<dyn SessionService>,
}

impl AuthServiceImpl {
    pub fn new(config: Arc<dyn ConfigService>, sessions: Arc<dyn SessionService>) -> Self {
        Self { config, sessions }
    }
}

impl AuthService for AuthServiceImpl {
    fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        if !self.config.admin_credentials_match(username, password) {
            tracing::info!("rejected admin login");
            return Err(AuthError::new("invalid_credentials", INVALID_CREDENTIALS));
        }

        let mut session = self.sessions.create();
        session.set(IS_ADMIN, true);
        tracing::info!("admin logged in");
        Ok(session)
    }
}
