//! Product Domain Model
//!
//! The catalog record stored in the document store and cached as JSON.

use serde::{Deserialize, Serialize};

// == Product ==
/// A single catalog record.
///
/// Identity is the `id`; no two live records share one. The coordinator never
/// mutates a product's fields, it only reads and re-serializes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier, stable across store and cache
    pub id: String,
    /// Display name
    pub name: String,
    /// Category used for filtered queries
    pub category: String,
    /// Non-negative price
    pub price: f64,
    /// Non-negative stock count
    pub stock: u64,
}

impl Product {
    /// Builds a product from an identifier and its mutable fields.
    pub fn from_fields(id: impl Into<String>, fields: ProductFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            category: fields.category,
            price: fields.price,
            stock: fields.stock,
        }
    }
}

// == Product Fields ==
/// The mutable portion of a product, supplied on insert and update.
///
/// The store assigns the identifier on insert; updates replace these fields
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> ProductFields {
        ProductFields {
            name: "Drone".to_string(),
            category: "Electronics".to_string(),
            price: 499.0,
            stock: 10,
        }
    }

    #[test]
    fn test_from_fields() {
        let product = Product::from_fields("p-1", sample_fields());
        assert_eq!(product.id, "p-1");
        assert_eq!(product.name, "Drone");
        assert_eq!(product.category, "Electronics");
        assert_eq!(product.price, 499.0);
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn test_product_json_shape() {
        let product = Product::from_fields("p-1", sample_fields());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "p-1");
        assert_eq!(json["price"], 499.0);

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }
}
