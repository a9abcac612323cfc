#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};
use tempfile::TempDir;
use tower::ServiceExt;

use biolink::{
    app,
    config::Config,
    entities::{
        contact::Notification, identity_config::ResolvedIdentity, project::ProjectSummary,
    },
    repo::documents::FileDocumentStore,
    service::{
        config::ConfigServiceImpl,
        identity::{IdentityError, IdentityResolver},
        projects::ProjectFeed,
        session::{CookieSessionService, SessionService, IS_ADMIN},
        webhook::{WebhookError, WebhookNotifier},
    },
    state::{AppState, Services},
};

pub const ADMIN_USERNAME: &str = "playfairs";
pub const ADMIN_PASSWORD: &str = "8462PlayfairDisplay.cc";
pub const ACCOUNT_ID: &str = "123456789012345678";
pub const SESSION_SECRET: &str = "integration-test-secret";

pub fn token() -> String {
    "x".repeat(60)
}

pub struct StubResolver {
    pub accept: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl IdentityResolver for StubResolver {
    async fn resolve(&self, _: &str, _: &str) -> Result<ResolvedIdentity, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.accept {
            return Err(IdentityError::Authentication);
        }
        Ok(ResolvedIdentity {
            username: "playfairs".into(),
            discriminator: "0".into(),
            avatar_url: Some("https://cdn.discordapp.com/avatars/1/live.png".into()),
            status: None,
        })
    }
}

pub struct StubFeed(pub Vec<ProjectSummary>);

#[async_trait]
impl ProjectFeed for StubFeed {
    async fn fetch_projects(&self, _: &str) -> Vec<ProjectSummary> {
        self.0.clone()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, serde_json::Value)>>,
}

#[async_trait]
impl WebhookNotifier for RecordingNotifier {
    async fn send(&self, url: &str, notification: &Notification) -> Result<(), WebhookError> {
        let body = serde_json::to_value(notification).expect("notification json");
        self.sent.lock().unwrap().push((url.to_string(), body));
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
    pub resolver: Arc<StubResolver>,
    pub notifier: Arc<RecordingNotifier>,
}

pub struct Options {
    pub webhook_urls: Vec<String>,
    pub accept_identity: bool,
    pub projects: Vec<ProjectSummary>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            webhook_urls: vec!["https://hooks.test/one".to_string()],
            accept_identity: true,
            projects: Vec::new(),
        }
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with(Options::default())
    }

    pub fn with(options: Options) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ConfigServiceImpl::from_config(Config {
            data_dir: dir.path().to_path_buf(),
            admin_username: Some(ADMIN_USERNAME.into()),
            admin_password: Some(ADMIN_PASSWORD.into()),
            session_secret: Some(SESSION_SECRET.into()),
            webhook_urls: options.webhook_urls,
            ..Config::default()
        });
        let resolver = Arc::new(StubResolver {
            accept: options.accept_identity,
            calls: AtomicUsize::new(0),
        });
        let notifier = Arc::new(RecordingNotifier::default());

        let state = AppState::with_services(Services {
            config: Arc::new(config),
            documents: Arc::new(FileDocumentStore::new(dir.path())),
            identity: resolver.clone(),
            projects: Arc::new(StubFeed(options.projects)),
            webhooks: notifier.clone(),
        });

        Self {
            router: app(state),
            dir,
            resolver,
            notifier,
        }
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response {
        let mut req = Request::get(path);
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(req.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, path: &str, body: &str, cookie: Option<&str>) -> Response {
        let mut req = Request::post(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }
        self.router
            .clone()
            .oneshot(req.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    /// Logs in and returns the `name=value` pair to send back as a cookie.
    pub async fn login(&self) -> String {
        let body = format!("username={ADMIN_USERNAME}&password={ADMIN_PASSWORD}");
        let resp = self.post_form("/login", &body, None).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        session_cookie(&resp).expect("session cookie")
    }

    pub fn file(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join(name)).ok()
    }
}

/// A validly signed session that is not marked as admin.
pub fn non_admin_cookie() -> String {
    let sessions = CookieSessionService::new(Some(SESSION_SECRET), false);
    let mut session = sessions.create();
    session.set(IS_ADMIN, false);
    let resp = sessions
        .commit(&session)
        .expect("commit session")
        .into_response();
    session_cookie(&resp).expect("session cookie")
}

pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| value.starts_with("__session="))
        .map(|value| value.split(';').next().unwrap_or_default().to_string())
}

pub fn set_cookie_header(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub fn location(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}
