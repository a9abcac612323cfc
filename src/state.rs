use std::{sync::Arc, time::Duration};

use crate::{
    repo::documents::{DocumentStore, FileDocumentStore},
    service::{
        auth::{AuthService, AuthServiceImpl},
        config::{ConfigService, ConfigServiceImpl},
        config_store::{ConfigStore, ConfigStoreImpl},
        identity::{DiscordIdentityResolver, IdentityResolver},
        projects::{GithubProjectFeed, ProjectFeed},
        session::{CookieSessionService, SessionService},
        webhook::{DiscordWebhookNotifier, WebhookNotifier},
    },
};

/// The swappable edges of the application. Tests replace any of them.
pub struct Services {
    pub config: Arc<dyn ConfigService>,
    pub documents: Arc<dyn DocumentStore>,
    pub identity: Arc<dyn IdentityResolver>,
    pub projects: Arc<dyn ProjectFeed>,
    pub webhooks: Arc<dyn WebhookNotifier>,
}

impl Services {
    /// Filesystem documents and live HTTP clients, all driven by `config`.
    pub fn production(config: Arc<dyn ConfigService>) -> Self {
        let values = config.values();
        let timeout = Duration::from_secs(values.http_timeout_seconds);
        let documents = Arc::new(FileDocumentStore::new(values.data_dir.clone()));
        let identity = Arc::new(DiscordIdentityResolver::new(
            values.discord_api_base.clone(),
            timeout,
        ));
        let projects = Arc::new(
            GithubProjectFeed::new(values.github_api_base.clone(), timeout)
                .expect("github client build failed"),
        );
        let webhooks =
            Arc::new(DiscordWebhookNotifier::new(timeout).expect("webhook client build failed"));

        Self {
            config,
            documents,
            identity,
            projects,
            webhooks,
        }
    }
}

pub struct AppState {
    config: Arc<dyn ConfigService>,
    store: Arc<dyn ConfigStore>,
    identity: Arc<dyn IdentityResolver>,
    projects: Arc<dyn ProjectFeed>,
    webhooks: Arc<dyn WebhookNotifier>,
    sessions: Arc<dyn SessionService>,
    auth: Arc<dyn AuthService>,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config: Arc<dyn ConfigService> = Arc::new(ConfigServiceImpl::new());
        Self::with_services(Services::production(config))
    }

    pub fn with_services(services: Services) -> Arc<Self> {
        let Services {
            config,
            documents,
            identity,
            projects,
            webhooks,
        } = services;

        let values = config.values();
        let sessions: Arc<dyn SessionService> = Arc::new(CookieSessionService::new(
            values.session_secret.as_deref(),
            values.cookie_secure,
        ));
        let store = Arc::new(ConfigStoreImpl::new(documents, identity.clone()));
        let auth = Arc::new(AuthServiceImpl::new(config.clone(), sessions.clone()));

        Arc::new(Self {
            config,
            store,
            identity,
            projects,
            webhooks,
            sessions,
            auth,
        })
    }

    pub fn config(&self) -> &dyn ConfigService {
        self.config.as_ref()
    }

    pub fn store(&self) -> &dyn ConfigStore {
        self.store.as_ref()
    }

    pub fn identity(&self) -> &dyn IdentityResolver {
        self.identity.as_ref()
    }

    pub fn projects(&self) -> &dyn ProjectFeed {
        self.projects.as_ref()
    }

    pub fn webhooks(&self) -> &dyn WebhookNotifier {
        self.webhooks.as_ref()
    }

    pub fn sessions(&self) -> &dyn SessionService {
        self.sessions.as_ref()
    }

    pub fn auth(&self) -> &dyn AuthService {
        self.auth.as_ref()
    }
}
