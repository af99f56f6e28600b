//! Domain layer containing the catalog entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; the repository trait is implemented in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
