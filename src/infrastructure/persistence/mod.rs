//! Product store implementations.
//!
//! - [`PgProductRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryProductRepository`] - process-local storage for development and tests

pub mod memory_product_repository;
pub mod pg_product_repository;

pub use memory_product_repository::InMemoryProductRepository;
pub use pg_product_repository::PgProductRepository;
