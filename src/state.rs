//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ProductService;
use crate::domain::repositories::ProductRepository;

/// Per-process handle to the catalog, cloned into each request.
///
/// Holds no mutable state of its own; everything lives in the store behind
/// the repository.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
}

impl AppState {
    /// Builds the state around a store connection handle.
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            product_service: Arc::new(ProductService::new(repository)),
        }
    }
}
