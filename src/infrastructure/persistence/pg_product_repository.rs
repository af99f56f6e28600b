//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductId, ProductPatch};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Row shape shared by every query on `products`.
#[derive(sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: String,
    price: f64,
    quantity: f64,
    category: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from_stored(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            quantity: row.quantity,
            category: row.category,
        }
    }
}

/// PostgreSQL repository for the product collection.
///
/// Table constraints mirror the field requirements, so a write that slips
/// past request validation is still rejected by the store.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self, name_filter: Option<String>) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, quantity, category
            FROM products
            WHERE ($1::text IS NULL OR POSITION(LOWER($1) IN LOWER(name)) > 0)
            ORDER BY created_at, id
            "#,
        )
        .bind(name_filter)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, quantity, category
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let id = ProductId::generate();

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (id, name, description, price, quantity, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, description, price, quantity, category
            "#,
        )
        .bind(id.as_str())
        .bind(&new_product.name)
        .bind(&new_product.description)
        .bind(new_product.price)
        .bind(new_product.quantity)
        .bind(&new_product.category)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, AppError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products SET
                name        = COALESCE($2, name),
                description = COALESCE($3, description),
                price       = COALESCE($4, price),
                quantity    = COALESCE($5, quantity),
                category    = COALESCE($6, category),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id, name, description, price, quantity, category
            "#,
        )
        .bind(id.as_str())
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.quantity)
        .bind(patch.category)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn delete(&self, id: &ProductId) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            DELETE FROM products
            WHERE id = $1
            RETURNING id, name, description, price, quantity, category
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
