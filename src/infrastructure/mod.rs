//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Product store implementations
pub mod persistence;
