//! Property-Based Tests for the Cache Layer
//!
//! Uses proptest to verify key canonicalization, filter validation, and
//! counter accuracy over generated inputs.

use proptest::prelude::*;
use std::sync::Arc;

use crate::cache::{keys, CacheStats, MemoryCache};
use crate::catalog::ProductFilter;
use crate::models::FilterQuery;

// == Strategies ==
/// Generates category names without separator characters.
fn category_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z][a-zA-Z0-9_]{0,15}")
}

/// Generates optional non-negative prices with two decimals at most.
fn price_strategy() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of((0u32..1_000_000).prop_map(|cents| f64::from(cents) / 100.0))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A filter key is a pure function of the normalized filter: deriving it
    // twice, or from a re-parsed spelling of the same numbers, always yields
    // the same key.
    #[test]
    fn prop_filter_key_deterministic(
        category in category_strategy(),
        price_min in price_strategy(),
        price_max in price_strategy()
    ) {
        let first = keys::filter_key(category.as_deref(), price_min, price_max);
        let second = keys::filter_key(category.as_deref(), price_min, price_max);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.starts_with("products:filter:"));
    }

    // Key segments appear sorted by field name, so logically identical
    // filters collide regardless of the order parameters arrived in.
    #[test]
    fn prop_filter_key_segments_sorted(
        category in category_strategy(),
        price_min in price_strategy(),
        price_max in price_strategy()
    ) {
        let key = keys::filter_key(category.as_deref(), price_min, price_max);
        let suffix = key.strip_prefix("products:filter:").unwrap();

        if suffix != "all" {
            let fields: Vec<&str> = suffix
                .split('&')
                .map(|pair| pair.split('=').next().unwrap())
                .collect();
            let mut sorted = fields.clone();
            sorted.sort_unstable();
            prop_assert_eq!(fields, sorted);
        }
    }

    // Different textual spellings of the same number produce the same key
    // once parsed through the filter builder.
    #[test]
    fn prop_filter_key_collapses_spellings(value in 0u32..1_000_000) {
        let plain = FilterQuery {
            category: None,
            price_min: Some(value.to_string()),
            price_max: None,
        };
        let decimal = FilterQuery {
            category: None,
            price_min: Some(format!("{value}.0")),
            price_max: None,
        };

        let a = ProductFilter::parse(plain).unwrap();
        let b = ProductFilter::parse(decimal).unwrap();
        prop_assert_eq!(a.cache_key(), b.cache_key());
    }

    // Alphabetic price strings never validate; the offending field is named.
    #[test]
    fn prop_validation_rejects_alphabetic_prices(raw in "[a-zA-Z][a-zA-Z ]{0,20}") {
        let query = FilterQuery {
            category: None,
            price_min: Some(raw),
            price_max: None,
        };

        let err = ProductFilter::parse(query).unwrap_err();
        prop_assert_eq!(err.to_string(), "Invalid value for price_min");
    }

    // Negative price strings are rejected before they can reach a predicate.
    #[test]
    fn prop_validation_rejects_negative_prices(value in 1u32..1_000_000) {
        let query = FilterQuery {
            category: None,
            price_min: None,
            price_max: Some(format!("-{value}")),
        };

        let err = ProductFilter::parse(query).unwrap_err();
        prop_assert_eq!(err.to_string(), "Invalid value for price_max");
    }

    // Counters reflect exactly the recorded events, in any interleaving.
    #[test]
    fn prop_statistics_accuracy(events in prop::collection::vec(any::<bool>(), 1..200)) {
        let stats = CacheStats::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for hit in events {
            if hit {
                stats.record_hit();
                expected_hits += 1;
            } else {
                stats.record_miss();
                expected_misses += 1;
            }
        }

        let snapshot = stats.snapshot();
        prop_assert_eq!(snapshot.hits, expected_hits);
        prop_assert_eq!(snapshot.misses, expected_misses);
    }
}

// Separate proptest block with fewer cases for tests that spin up a runtime
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Last write wins: for any key, setting V1 then V2 reads back V2.
    #[test]
    fn prop_memory_cache_last_write_wins(
        key in "[a-zA-Z0-9:_]{1,64}",
        value1 in "[a-zA-Z0-9 ]{1,128}",
        value2 in "[a-zA-Z0-9 ]{1,128}"
    ) {
        use crate::cache::CacheBackend;

        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let cache = Arc::new(MemoryCache::new());

            cache.set(&key, value1, 300).await.unwrap();
            cache.set(&key, value2.clone(), 300).await.unwrap();

            let read = cache.get(&key).await.unwrap();
            prop_assert_eq!(read, Some(value2));
            prop_assert_eq!(cache.len().await, 1);
            Ok(())
        })?;
    }
}
