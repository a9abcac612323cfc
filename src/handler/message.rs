use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use std::sync::Arc;

use crate::{
    handler::redirect_with_message,
    service::{
        contact::{self, ContactError, ContactForm},
        validation::FieldErrors,
    },
    state::AppState,
    view,
};

pub const SENT: &str = "Your message has been sent successfully!";
pub const SEND_FAILED: &str = "Failed to send message. Please try again later.";

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/message", get(message_page).post(send_message))
        .with_state(state)
}

pub async fn message_page() -> Html<String> {
    Html(view::forms::message(&ContactForm::default(), &FieldErrors::new()))
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactForm>,
) -> Response {
    let message = match form.validate() {
        Ok(message) => message,
        Err(errors) => {
            return (
                StatusCode::BAD_REQUEST,
                Html(view::forms::message(&form, &errors)),
            )
                .into_response();
        }
    };

    let urls = &state.config().values().webhook_urls;
    match contact::deliver(state.webhooks(), urls, &message).await {
        Ok(delivered) => {
            tracing::info!(delivered, "contact message forwarded");
            redirect_with_message("/", SENT).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "contact message not forwarded");
            let status = match err {
                ContactError::NoWebhooks => StatusCode::SERVICE_UNAVAILABLE,
                ContactError::Delivery { .. } => StatusCode::BAD_GATEWAY,
            };
            let errors = FieldErrors::single("general", SEND_FAILED);
            (status, Html(view::forms::message(&form, &errors))).into_response()
        }
    }
}
