//! Store Predicate
//!
//! Equality and range conditions a product query can carry. Built by the
//! filter query builder, evaluated by store implementations.

use crate::models::Product;

// == Product Predicate ==
/// Filter conditions for a store query.
///
/// Category matches by equality; the price bounds combine into one inclusive
/// range when both are present, or a one-sided condition otherwise. An empty
/// predicate matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPredicate {
    /// Category equality condition
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub price_min: Option<f64>,
    /// Inclusive upper price bound
    pub price_max: Option<f64>,
}

impl ProductPredicate {
    /// Returns true when no condition is present.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.price_min.is_none() && self.price_max.is_none()
    }

    /// Evaluates the predicate against a record.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }
        true
    }
}
