//! Request DTOs for the catalog API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::models::ProductFields;

/// Request body for creating or replacing a product
/// (POST /products, PUT /products/:id).
///
/// # Fields
/// - `name`: Display name, must be non-empty
/// - `category`: Category string
/// - `price`: Must be a finite, non-negative number
/// - `stock`: Stock count
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    /// Product display name
    pub name: String,
    /// Product category
    pub category: String,
    /// Product price
    pub price: f64,
    /// Units in stock
    pub stock: u64,
}

impl ProductRequest {
    /// Validates the request data.
    ///
    /// Returns the name of the offending field if validation fails, None if valid.
    pub fn validate(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("name");
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Some("price");
        }
        None
    }

    /// Converts the request into store-ready product fields.
    pub fn into_fields(self) -> ProductFields {
        ProductFields {
            name: self.name,
            category: self.category,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Query string for the filter endpoint (GET /products/filter).
///
/// Prices arrive as raw strings and are validated by the filter builder
/// before any cache or store access.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    /// Optional category equality filter
    #[serde(default)]
    pub category: Option<String>,
    /// Optional lower price bound as a numeric string
    #[serde(default)]
    pub price_min: Option<String>,
    /// Optional upper price bound as a numeric string
    #[serde(default)]
    pub price_max: Option<String>,
}
