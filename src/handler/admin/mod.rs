use axum::{
    extract::{Query, Request, State},
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::{handler::FlashQuery, state::AppState, view};

pub mod customize;
pub mod discord;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin", get(dashboard).post(logout))
        .route(
            "/admin/customize",
            get(customize::customize_page).post(customize::save_customize),
        )
        .route(
            "/admin/discord",
            get(discord::discord_page).post(discord::save_discord),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .with_state(state)
}

/// Sends anyone without an admin session to `/login` before the handler runs.
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn require_admin(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    if !state.sessions().is_admin(req.headers()) {
        tracing::debug!("no admin session, redirecting to login");
        return Redirect::to("/login").into_response();
    }
    next.run(req).await
}

pub async fn dashboard(Query(query): Query<FlashQuery>) -> Html<String> {
    Html(view::admin::dashboard(query.message.as_deref()))
}

pub async fn logout(State(state): State<Arc<AppState>>) -> Response {
    tracing::info!("admin logged out");
    (state.sessions().destroy(), Redirect::to("/")).into_response()
}
