//! Application layer services implementing catalog operations.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::product_service::ProductService`] - Product CRUD and filtering

pub mod services;
