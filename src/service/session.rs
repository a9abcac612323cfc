use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use cookie::time::Duration;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha512};
use std::collections::BTreeMap;

pub const SESSION_COOKIE: &str = "__session";
pub const IS_ADMIN: &str = "isAdmin";
/// Sessions live 24 hours from issuance.
pub const SESSION_MAX_AGE_SECONDS: i64 = 60 * 60 * 24;

/// Contents of the session cookie. Signed, not encrypted: the client can read it
/// but any change invalidates the signature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    values: BTreeMap<String, Value>,
    issued_at: DateTime<Utc>,
}

impl Session {
    pub fn issued_at(issued_at: DateTime<Utc>) -> Self {
        Self {
            values: BTreeMap::new(),
            issued_at,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn is_admin(&self) -> bool {
        self.get(IS_ADMIN).and_then(Value::as_bool).unwrap_or(false)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait SessionService: Send + Sync {
    fn create(&self) -> Session;
    /// `None` when the cookie is missing, forged, unreadable or past its lifetime.
    fn read(&self, headers: &HeaderMap) -> Option<Session>;
    fn commit(&self, session: &Session) -> Result<SignedCookieJar, SessionError>;
    fn destroy(&self) -> SignedCookieJar;

    fn is_admin(&self, headers: &HeaderMap) -> bool {
        self.read(headers).is_some_and(|session| session.is_admin())
    }
}

pub struct CookieSessionService {
    key: Key,
    secure: bool,
}

impl CookieSessionService {
    pub fn new(secret: Option<&str>, secure: bool) -> Self {
        let key = match secret {
            Some(secret) => Self::derive_key(secret),
            None => {
                tracing::warn!("SESSION_SECRET is not set; sessions will not survive a restart");
                Self::random_key()
            }
        };
        Self { key, secure }
    }

    fn derive_key(secret: &str) -> Key {
        Key::from(Sha512::digest(secret.as_bytes()).as_slice())
    }

    fn random_key() -> Key {
        let mut bytes = [0u8; 64];
        rand::thread_rng().fill_bytes(&mut bytes);
        Key::from(&bytes)
    }

    fn cookie(&self, value: String, max_age_seconds: i64) -> Cookie<'static> {
        let mut cookie = Cookie::new(SESSION_COOKIE, value);
        cookie.set_http_only(true);
        cookie.set_path("/");
        cookie.set_same_site(SameSite::Lax);
        cookie.set_max_age(Duration::seconds(max_age_seconds));
        if self.secure {
            cookie.set_secure(true);
        }
        cookie
    }

    fn decode(value: &str) -> Option<Session> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    fn expired(session: &Session) -> bool {
        let age = Utc::now().signed_duration_since(session.issued_at);
        age.num_seconds() >= SESSION_MAX_AGE_SECONDS
    }
}

impl SessionService for CookieSessionService {
    fn create(&self) -> Session {
        Session::issued_at(Utc::now())
    }

    fn read(&self, headers: &HeaderMap) -> Option<Session> {
        let jar = SignedCookieJar::from_headers(headers, self.key.clone());
        let cookie = jar.get(SESSION_COOKIE)?;
        let session = Self::decode(cookie.value())?;
        if Self::expired(&session) {
            return None;
        }
        Some(session)
    }

    fn commit(&self, session: &Session) -> Result<SignedCookieJar, SessionError> {
        let value = URL_SAFE_NO_PAD.encode(serde_json::to_vec(session)?);
        let cookie = self.cookie(value, SESSION_MAX_AGE_SECONDS);
        Ok(SignedCookieJar::new(self.key.clone()).add(cookie))
    }

    fn destroy(&self) -> SignedCookieJar {
        SignedCookieJar::new(self.key.clone()).add(self.cookie(String::new(), 0))
    }
}
