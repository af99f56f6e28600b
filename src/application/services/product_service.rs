//! Product catalog service.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductId, ProductPatch};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Service mapping catalog operations onto the product repository.
///
/// Parses identifiers, turns missing records into [`AppError::NotFound`] and
/// normalizes the list filter. Field validation happens before this layer.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Lists products, optionally filtered by a case-insensitive substring
    /// of the name. A blank filter lists everything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_products(&self, title: Option<String>) -> Result<Vec<Product>, AppError> {
        let filter = title.filter(|t| !t.is_empty());
        self.repository.list(filter).await
    }

    /// Retrieves a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is malformed or unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn get_product(&self, raw_id: &str) -> Result<Product, AppError> {
        let id = parse_id(raw_id)?;

        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(AppError::resource_not_found)
    }

    /// Persists a new product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = self.repository.create(new_product).await?;
        tracing::info!(id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Applies a partial update and returns the resulting product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is malformed or unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn update_product(
        &self,
        raw_id: &str,
        patch: ProductPatch,
    ) -> Result<Product, AppError> {
        let id = parse_id(raw_id)?;

        let product = self
            .repository
            .update(&id, patch)
            .await?
            .ok_or_else(AppError::resource_not_found)?;

        tracing::info!(id = %product.id, "Product updated");
        Ok(product)
    }

    /// Deletes a product and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is malformed or unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete_product(&self, raw_id: &str) -> Result<Product, AppError> {
        let id = parse_id(raw_id)?;

        let product = self
            .repository
            .delete(&id)
            .await?
            .ok_or_else(AppError::resource_not_found)?;

        tracing::info!(id = %product.id, name = %product.name, "Product deleted");
        Ok(product)
    }

    /// Checks that the underlying store answers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}

/// Malformed identifiers are indistinguishable from unknown ones.
fn parse_id(raw_id: &str) -> Result<ProductId, AppError> {
    ProductId::parse(raw_id).ok_or_else(AppError::resource_not_found)
}
