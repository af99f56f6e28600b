//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs are validated (via `validator` or explicit field checks)
//! before they are converted into domain inputs.

pub mod health;
pub mod product;
