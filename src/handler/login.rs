use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{service::validation::FieldErrors, state::AppState, view};

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", get(login_page).post(login))
        .with_state(state)
}

pub async fn login_page(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    if state.sessions().is_admin(&headers) {
        return Redirect::to("/admin").into_response();
    }
    Html(view::forms::login("", &FieldErrors::new())).into_response()
}

pub async fn login(State(state): State<Arc<AppState>>, Form(form): Form<LoginForm>) -> Response {
    let session = match state.auth().login(&form.username, &form.password) {
        Ok(session) => session,
        Err(err) => {
            let errors = FieldErrors::single("login", err.message);
            return (
                StatusCode::UNAUTHORIZED,
                Html(view::forms::login(&form.username, &errors)),
            )
                .into_response();
        }
    };

    match state.sessions().commit(&session) {
        Ok(jar) => (jar, Redirect::to("/admin")).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "session commit failed");
            let errors = FieldErrors::single("login", "Could not start a session");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(view::forms::login(&form.username, &errors)),
            )
                .into_response()
        }
    }
}
