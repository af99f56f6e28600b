//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - Landing page
//! - `GET  /health`        - Store health check
//! - `/api/products[/{id}]` - Product CRUD (see [`crate::api::routes`])
//! - anything else         - 404 Not Found (including wrong methods)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, home_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routing table with state and tracing applied.
///
/// Unmatched paths, and unsupported methods on known paths, fall through to
/// [`not_found_handler`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::product_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] wrapped so that
/// `/api/products/` routes the same as `/api/products`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
