//! Core domain entities.
//!
//! - [`Product`] - A persisted catalog record
//! - [`NewProduct`] - Validated input for creating a record
//! - [`ProductPatch`] - Validated partial update
//! - [`ProductId`] - Store-assigned identifier

pub mod product;

pub use product::{NewProduct, Product, ProductId, ProductPatch};
