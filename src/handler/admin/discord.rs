use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use std::sync::Arc;

use crate::{
    entities::identity_config::IdentityConfig,
    handler::redirect_with_message,
    service::{config_store::SaveError, validation::FieldErrors},
    state::AppState,
    view,
};

pub const AUTH_FAILED: &str = "Failed to authenticate with Discord. Please check your credentials.";

pub async fn discord_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let config = state.store().load_identity_config().await;
    Html(view::admin::discord(&config, &FieldErrors::new()))
}

pub async fn save_discord(
    State(state): State<Arc<AppState>>,
    Form(form): Form<IdentityConfig>,
) -> Response {
    let (status, errors) = match state.store().save_identity_config(form.clone()).await {
        Ok(_) => {
            return redirect_with_message("/admin", "Discord integration updated successfully")
                .into_response();
        }
        Err(SaveError::Invalid(errors)) => (StatusCode::BAD_REQUEST, errors),
        Err(SaveError::Authentication) => (
            StatusCode::BAD_REQUEST,
            FieldErrors::single("general", AUTH_FAILED),
        ),
        Err(SaveError::Store(err)) => {
            tracing::error!(error = %err, "identity config save failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                FieldErrors::single("general", "Failed to save the Discord configuration."),
            )
        }
    };
    (status, Html(view::admin::discord(&form, &errors))).into_response()
}
