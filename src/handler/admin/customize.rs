use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    entities::site_config::{ColorScheme, SiteConfig},
    handler::redirect_with_message,
    service::{config_store::SaveError, validation::FieldErrors},
    state::AppState,
    view,
};

#[derive(Deserialize)]
pub struct CustomizeForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default, rename = "colorScheme")]
    pub color_scheme: Option<String>,
}

pub async fn customize_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let config = state.store().load_site_config().await;
    let scheme = ColorScheme::of(&config).unwrap_or_default();
    Html(view::admin::customize(&config, scheme, &FieldErrors::new()))
}

pub async fn save_customize(
    State(state): State<Arc<AppState>>,
    Form(form): Form<CustomizeForm>,
) -> Response {
    let scheme = ColorScheme::from_name(form.color_scheme.as_deref());
    let config = SiteConfig::with_scheme(form.title, form.subtitle, scheme);

    let (status, errors) = match state.store().save_site_config(config.clone()).await {
        Ok(_) => {
            return redirect_with_message("/admin", "Landing page updated successfully")
                .into_response();
        }
        Err(SaveError::Invalid(errors)) => (StatusCode::BAD_REQUEST, errors),
        Err(err) => {
            tracing::error!(error = %err, "site config save failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                FieldErrors::single("general", "Failed to save the landing page configuration."),
            )
        }
    };
    (status, Html(view::admin::customize(&config, scheme, &errors))).into_response()
}
