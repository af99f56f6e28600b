//! Product entity, the single record type held in the catalog.

use std::fmt;

use crate::utils::id_generator::{generate_id, normalize_id};

/// Store-assigned product identifier.
///
/// Always 24 lowercase hex characters. Construct through [`ProductId::generate`]
/// or [`ProductId::parse`]; malformed input never produces a `ProductId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Generates a fresh identifier for a record about to be inserted.
    pub fn generate() -> Self {
        Self(generate_id())
    }

    /// Parses a client-supplied identifier.
    ///
    /// Returns `None` for malformed input so callers can answer "not found"
    /// without a store round-trip.
    pub fn parse(raw: &str) -> Option<Self> {
        normalize_id(raw).map(Self)
    }

    /// Wraps an identifier read back from the store, which only ever holds
    /// generated values.
    pub(crate) fn from_stored(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: f64,
    pub category: String,
}

impl Product {
    /// Builds the record that results from inserting `new_product` under `id`.
    pub fn from_new(id: ProductId, new_product: NewProduct) -> Self {
        Self {
            id,
            name: new_product.name,
            description: new_product.description,
            price: new_product.price,
            quantity: new_product.quantity,
            category: new_product.category,
        }
    }

    /// Applies a patch in place. `None` fields are left unchanged.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    /// Returns true if `needle` occurs in the name, ignoring case.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Fully validated input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: f64,
    pub category: String,
}

/// Partial update for an existing product.
///
/// `None` fields are left unchanged. Every `Some` value has already passed
/// field validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<f64>,
    pub category: Option<String>,
}

impl ProductPatch {
    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.category.is_none()
    }
}
