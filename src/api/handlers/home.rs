//! Landing page and catch-all handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::error::AppError;

/// Template for the landing page served at `/`.
///
/// Renders `templates/index.html`, a static overview of the catalog API.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    IndexTemplate {
        version: env!("CARGO_PKG_VERSION"),
    }
}

/// Answers every request that matches no route.
pub async fn not_found_handler() -> AppError {
    AppError::resource_not_found()
}
