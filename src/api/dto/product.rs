//! DTOs for the product endpoints.

use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::error::AppError;

/// Query parameters for `GET /api/products`.
#[derive(Debug, Default)]
pub struct ListProductsParams {
    /// Case-insensitive substring of the product name.
    pub title: Option<String>,
}

impl From<Vec<(String, String)>> for ListProductsParams {
    /// Builds the parameters from raw query pairs. A repeated `title` keeps
    /// its first value; unknown keys are ignored.
    fn from(pairs: Vec<(String, String)>) -> Self {
        let title = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "title").then_some(value));

        Self { title }
    }
}

/// Request body for `POST /api/products`.
///
/// Fields are optional at the serde level so that a missing field surfaces as
/// a field-level validation error rather than an opaque parse failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(required, length(min = 1, code = "empty"))]
    pub name: Option<String>,

    #[validate(required, length(min = 1, code = "empty"))]
    pub description: Option<String>,

    #[validate(required)]
    pub price: Option<f64>,

    #[validate(required)]
    pub quantity: Option<f64>,

    #[validate(required, length(min = 1, code = "empty"))]
    pub category: Option<String>,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = AppError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let CreateProductRequest {
            name: Some(name),
            description: Some(description),
            price: Some(price),
            quantity: Some(quantity),
            category: Some(category),
        } = request
        else {
            return Err(AppError::bad_request("Product validation failed", json!({})));
        };

        Ok(NewProduct {
            name,
            description,
            price,
            quantity,
            category,
        })
    }
}

/// Request body for `PUT /api/products/{id}`.
///
/// # Field semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → rejected, the field is required
/// - **Value** → overwrite
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub price: Option<Option<f64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub quantity: Option<Option<f64>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,
}

impl TryFrom<UpdateProductRequest> for ProductPatch {
    type Error = AppError;

    /// Validates only the fields present in the request; the stored record
    /// already satisfies the requirements for the rest.
    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        let patch = ProductPatch {
            name: check_text("name", request.name, &mut errors),
            description: check_text("description", request.description, &mut errors),
            price: check_present("price", request.price, &mut errors),
            quantity: check_present("quantity", request.quantity, &mut errors),
            category: check_text("category", request.category, &mut errors),
        };

        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors.into())
        }
    }
}

fn check_present<T>(
    field: &'static str,
    value: Option<Option<T>>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    match value {
        Some(None) => {
            errors.add(field, ValidationError::new("required"));
            None
        }
        other => other.flatten(),
    }
}

fn check_text(
    field: &'static str,
    value: Option<Option<String>>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match check_present(field, value, errors) {
        Some(text) if text.is_empty() => {
            errors.add(field, ValidationError::new("empty"));
            None
        }
        other => other,
    }
}

/// JSON representation of a product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: f64,
    pub category: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            category: product.category,
        }
    }
}

/// Response body for `DELETE /api/products/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: String,
}

impl DeleteProductResponse {
    pub fn for_product(product: &Product) -> Self {
        Self {
            message: format!("Deleted product: {}", product.name),
        }
    }
}
