use axum::response::Redirect;
use serde::Deserialize;

pub mod admin;
pub mod health;
pub mod landing;
pub mod login;
pub mod message;

/// `?message=` flash shown by the landing page and the admin dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub message: Option<String>,
}

pub fn redirect_with_message(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{}?message={}", path, urlencoding::encode(message)))
}
