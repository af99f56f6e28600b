//! Process-local product repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{NewProduct, Product, ProductId, ProductPatch};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// A repository that keeps products in memory.
///
/// Used for local development (`STORE_BACKEND=memory`) and handler tests.
/// Records are kept in insertion order; nothing survives a restart.
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory product store");
        Self {
            products: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, name_filter: Option<String>) -> Result<Vec<Product>, AppError> {
        let products = self.products.read().await;

        Ok(match name_filter {
            Some(needle) => products
                .iter()
                .filter(|p| p.name_contains(&needle))
                .cloned()
                .collect(),
            None => products.clone(),
        })
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, AppError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| &p.id == id).cloned())
    }

    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let product = Product::from_new(ProductId::generate(), new_product);
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, AppError> {
        let mut products = self.products.write().await;

        Ok(products.iter_mut().find(|p| &p.id == id).map(|product| {
            product.apply(patch);
            product.clone()
        }))
    }

    async fn delete(&self, id: &ProductId) -> Result<Option<Product>, AppError> {
        let mut products = self.products.write().await;

        Ok(products
            .iter()
            .position(|p| &p.id == id)
            .map(|index| products.remove(index)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
