//! Handlers for the product CRUD endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::api::dto::product::{
    CreateProductRequest, DeleteProductResponse, ListProductsParams, ProductResponse,
    UpdateProductRequest,
};
use crate::domain::entities::{NewProduct, ProductPatch};
use crate::error::AppError;
use crate::state::AppState;

/// Lists products, optionally filtered by name.
///
/// # Endpoint
///
/// `GET /api/products?title={substring}`
///
/// # Query Parameters
///
/// - `title` (optional): case-insensitive substring of the product name.
///   Absent or empty returns every product. When repeated, the first value
///   is used.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store fails.
pub async fn list_products_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let Query(pairs) = query?;
    let params = ListProductsParams::from(pairs);

    let products = state.product_service.list_products(params.title).await?;

    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

/// Retrieves one product.
///
/// # Endpoint
///
/// `GET /api/products/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id is malformed or unknown.
pub async fn get_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.get_product(&id).await?;
    Ok(Json(product.into()))
}

/// Creates a product.
///
/// # Endpoint
///
/// `POST /api/products`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Widget",
///   "description": "A widget",
///   "price": 9.99,
///   "quantity": 10,
///   "category": "Tools"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or any field is missing,
/// empty or of the wrong type. Nothing is persisted in that case.
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let Json(payload) = payload?;
    let new_product = NewProduct::try_from(payload)?;

    let product = state.product_service.create_product(new_product).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Partially or fully updates a product.
///
/// # Endpoint
///
/// `PUT /api/products/{id}`
///
/// # Request Body
///
/// Any subset of the product fields. Omitted fields keep their value.
///
/// ```json
/// { "price": 7.99 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if a provided field is `null`, empty or mistyped.
/// Returns 404 Not Found if the id is malformed or unknown.
pub async fn update_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    let Json(payload) = payload?;
    let patch = ProductPatch::try_from(payload)?;

    let product = state.product_service.update_product(&id, patch).await?;

    Ok(Json(product.into()))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /api/products/{id}`
///
/// # Response
///
/// ```json
/// { "message": "Deleted product: Widget" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the id is malformed or unknown.
pub async fn delete_product_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteProductResponse>, AppError> {
    let product = state.product_service.delete_product(&id).await?;
    Ok(Json(DeleteProductResponse::for_product(&product)))
}
