//! Filter Query Builder
//!
//! Translates raw category/price-range parameters into a store predicate and
//! a deterministic cache key. Validation happens here, before the
//! coordinator touches the cache or the store.

use crate::cache::keys;
use crate::error::{CatalogError, Result};
use crate::models::FilterQuery;
use crate::store::ProductPredicate;

// == Product Filter ==
/// A validated catalog filter.
///
/// Prices arrive as numeric strings and must parse as finite, non-negative
/// numbers; anything else is rejected with a `Validation` error naming the
/// offending field. Empty strings are treated as absent parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    /// Category equality filter
    pub category: Option<String>,
    /// Parsed lower price bound
    pub price_min: Option<f64>,
    /// Parsed upper price bound
    pub price_max: Option<f64>,
}

impl ProductFilter {
    // == Parse ==
    /// Validates raw filter parameters.
    pub fn parse(query: FilterQuery) -> Result<Self> {
        let category = query.category.filter(|c| !c.trim().is_empty());
        let price_min = parse_price(query.price_min, "price_min")?;
        let price_max = parse_price(query.price_max, "price_max")?;

        Ok(Self {
            category,
            price_min,
            price_max,
        })
    }

    // == Cache Key ==
    /// Canonical cache key for this filter.
    ///
    /// Logically identical filters always derive the same key regardless of
    /// the order their parameters arrived in.
    pub fn cache_key(&self) -> String {
        keys::filter_key(self.category.as_deref(), self.price_min, self.price_max)
    }

    // == Predicate ==
    /// Store predicate equivalent to this filter.
    pub fn predicate(&self) -> ProductPredicate {
        ProductPredicate {
            category: self.category.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
        }
    }
}

/// Parses an optional numeric-string price, rejecting non-numbers and
/// negative values.
fn parse_price(raw: Option<String>, field: &str) -> Result<Option<f64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(CatalogError::validation(field)),
    }
}
