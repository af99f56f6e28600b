//! Utility functions shared across layers.
//!
//! - [`id_generator`] - Product identifier generation and parsing

pub mod id_generator;
