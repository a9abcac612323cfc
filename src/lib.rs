use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod entities;
pub mod handler;
pub mod openapi;
pub mod repo;
pub mod service;
pub mod state;
pub mod view;

use crate::{openapi::ApiDoc, state::AppState};

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handler::health::routes())
        .merge(handler::landing::routes(state.clone()))
        .merge(handler::message::routes(state.clone()))
        .merge(handler::login::routes(state.clone()))
        .merge(handler::admin::routes(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
