//! Cache Key Derivation
//!
//! Keys are derived deterministically from operation type and parameters so
//! that logically identical reads share one cache entry.

/// Key for the full product list.
pub const ALL_PRODUCTS_KEY: &str = "products:all";

/// Prefix for filtered-list keys.
const FILTER_KEY_PREFIX: &str = "products:filter:";

/// Key for a single product.
pub fn product_key(id: &str) -> String {
    format!("product:{id}")
}

/// Canonical key for a filtered list.
///
/// Present fields are sorted by name and concatenated as `field=value` pairs,
/// so equivalent filters collide to the same key regardless of the order the
/// parameters arrived in. Prices are rendered from the parsed numbers, which
/// also collapses spellings like `"100"` and `"100.0"`.
pub fn filter_key(
    category: Option<&str>,
    price_min: Option<f64>,
    price_max: Option<f64>,
) -> String {
    let mut pairs: Vec<String> = Vec::with_capacity(3);
    if let Some(category) = category {
        pairs.push(format!("category={}", escape_value(category)));
    }
    if let Some(max) = price_max {
        pairs.push(format!("price_max={max}"));
    }
    if let Some(min) = price_min {
        pairs.push(format!("price_min={min}"));
    }
    // Field names above are already emitted in sorted order; sort again so
    // the invariant survives reordering of the blocks.
    pairs.sort();

    if pairs.is_empty() {
        return format!("{FILTER_KEY_PREFIX}all");
    }
    format!("{FILTER_KEY_PREFIX}{}", pairs.join("&"))
}

/// Percent-encodes the characters that structure a filter key.
///
/// A caller-supplied value containing `&` or `=` must not be able to forge
/// extra `field=value` segments, otherwise two different filters could share
/// one cache entry.
fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => escaped.push_str("%25"),
            '&' => escaped.push_str("%26"),
            '=' => escaped.push_str("%3D"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_key() {
        assert_eq!(product_key("p-1"), "product:p-1");
    }

    #[test]
    fn test_filter_key_sorted_fields() {
        let key = filter_key(Some("Bike"), Some(100.0), Some(200.0));
        assert_eq!(key, "products:filter:category=Bike&price_max=200&price_min=100");
    }

    #[test]
    fn test_filter_key_one_sided() {
        assert_eq!(
            filter_key(None, Some(10.0), None),
            "products:filter:price_min=10"
        );
        assert_eq!(
            filter_key(None, None, Some(10.5)),
            "products:filter:price_max=10.5"
        );
    }

    #[test]
    fn test_filter_key_empty() {
        assert_eq!(filter_key(None, None, None), "products:filter:all");
    }

    #[test]
    fn test_filter_key_escapes_separator_characters() {
        // A category carrying the pair separators must not collide with a
        // genuinely multi-field filter
        let forged = filter_key(Some("A&price_min=5"), None, None);
        let real = filter_key(Some("A"), Some(5.0), None);
        assert_ne!(forged, real);
        assert_eq!(forged, "products:filter:category=A%26price_min%3D5");
        assert_eq!(real, "products:filter:category=A&price_min=5");
    }

    #[test]
    fn test_filter_key_escaping_preserves_distinctness_of_percent() {
        // The escape character itself is escaped, so "A%26B" and "A&B"
        // stay distinct
        assert_ne!(
            filter_key(Some("A%26B"), None, None),
            filter_key(Some("A&B"), None, None)
        );
    }

    #[test]
    fn test_filter_key_renders_whole_prices_without_decimals() {
        // "100" and "100.0" both parse to 100.0, which renders as "100"
        assert!(filter_key(None, Some(100.0), None).ends_with("price_min=100"));
        assert!(filter_key(None, Some(99.5), None).ends_with("price_min=99.5"));
    }
}
