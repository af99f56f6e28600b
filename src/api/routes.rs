//! API route configuration.

use crate::api::handlers::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    not_found_handler, update_product_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Product routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /products`        - List products, optional `?title=` name filter
/// - `POST   /products`        - Create a product
/// - `GET    /products/{id}`   - Fetch one product
/// - `PUT    /products/{id}`   - Update a product (partial or full)
/// - `DELETE /products/{id}`   - Delete a product
///
/// Any other method on these paths answers 404.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .method_not_allowed_fallback(not_found_handler)
}
