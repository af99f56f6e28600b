//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product, ProductId, ProductPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Document-store interface for the product collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryProductRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns all products, or those whose name contains `name_filter`
    /// ignoring case. Results come back in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self, name_filter: Option<String>) -> Result<Vec<Product>, AppError>;

    /// Finds a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, AppError>;

    /// Inserts a product under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Applies a patch atomically and returns the updated record, or `None`
    /// if no product has this identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn update(&self, id: &ProductId, patch: ProductPatch)
    -> Result<Option<Product>, AppError>;

    /// Removes a product and returns the removed record, or `None` if no
    /// product has this identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, id: &ProductId) -> Result<Option<Product>, AppError>;

    /// Verifies the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
