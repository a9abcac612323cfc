use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{
    entities::identity_config::ResolvedIdentity,
    handler::FlashQuery,
    state::AppState,
    view::landing::{render, LandingPage},
};

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(landing)).with_state(state)
}

/// Best-effort: a failed lookup only hides the profile card.
async fn live_identity(state: &AppState) -> Option<ResolvedIdentity> {
    let config = state.store().load_identity_config().await;
    if !config.has_credentials() {
        return None;
    }
    match state
        .identity()
        .resolve(&config.user_id, &config.bot_token)
        .await
    {
        Ok(identity) => Some(identity.with_fallback(&config)),
        Err(err) => {
            tracing::warn!(error = %err, "discord profile unavailable");
            None
        }
    }
}

pub async fn landing(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FlashQuery>,
) -> Html<String> {
    let site = state.store().load_site_config().await;
    let identity = live_identity(&state).await;
    let github_account = &state.config().values().github_account;
    let projects = state.projects().fetch_projects(github_account).await;

    Html(render(&LandingPage {
        site: &site,
        identity: identity.as_ref(),
        projects: &projects,
        github_account,
        flash: query.message.as_deref(),
    }))
}
