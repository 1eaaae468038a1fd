//! Cache-Aside Coordinator
//!
//! Every catalog operation enters here. Reads derive a cache key, consult the
//! cache, fall back to the store on a miss, and repopulate the cache. Writes
//! go to the store first and synchronously invalidate the affected keys
//! before returning, so a caller's own write-then-read observes the write.
//!
//! The cache is an optimization, never the source of truth: store failures
//! are fatal for the operation, cache failures degrade to store reads and
//! skipped invalidations.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::{keys, CacheClient, CacheStats, StatsSnapshot};
use crate::catalog::ProductFilter;
use crate::config::Config;
use crate::error::Result;
use crate::models::{FilterQuery, Product, ProductFields};
use crate::store::ProductStore;

// == Catalog Service ==
/// Coordinates cache-aside reads and write-invalidation for the catalog.
///
/// Stateless apart from its injected store and cache handles and the atomic
/// hit/miss counters; constructed once at startup and cloned per caller.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
    cache: CacheClient,
    stats: Arc<CacheStats>,
    /// TTL in seconds for single-product entries
    item_ttl: u64,
    /// TTL in seconds for list and filtered-list entries
    list_ttl: u64,
}

impl CatalogService {
    // == Constructor ==
    /// Creates a new service with injected store and cache handles.
    pub fn new(store: Arc<dyn ProductStore>, cache: CacheClient, item_ttl: u64, list_ttl: u64) -> Self {
        Self {
            store,
            cache,
            stats: Arc::new(CacheStats::new()),
            item_ttl,
            list_ttl,
        }
    }

    /// Creates a new service taking TTLs from the configuration.
    pub fn from_config(store: Arc<dyn ProductStore>, cache: CacheClient, config: &Config) -> Self {
        Self::new(store, cache, config.item_cache_ttl, config.list_cache_ttl)
    }

    // == List All ==
    /// Returns the full product list, cache-aside under `products:all`.
    ///
    /// A miss always repopulates the full list, never a partial one.
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        if let Some(products) = self.read_cached::<Vec<Product>>(keys::ALL_PRODUCTS_KEY).await {
            return Ok(products);
        }

        let products = self.store.find_all().await?;
        self.write_cached(keys::ALL_PRODUCTS_KEY, &products, self.list_ttl)
            .await;
        Ok(products)
    }

    // == Get By Id ==
    /// Returns a single product, cache-aside under `product:<id>`.
    ///
    /// Absence is reported as None; only found records are cached.
    pub async fn get(&self, id: &str) -> Result<Option<Product>> {
        let key = keys::product_key(id);
        if let Some(product) = self.read_cached::<Product>(&key).await {
            return Ok(Some(product));
        }

        let product = self.store.find_by_id(id).await?;
        if let Some(product) = &product {
            self.write_cached(&key, product, self.item_ttl).await;
        }
        Ok(product)
    }

    // == Create ==
    /// Inserts a new product and invalidates the full-list entry.
    ///
    /// The new item is not proactively cached; the first subsequent read
    /// repopulates it. Filtered-list entries are left to expire via TTL.
    pub async fn create(&self, fields: ProductFields) -> Result<Product> {
        let product = self.store.insert(fields).await?;
        self.invalidate(keys::ALL_PRODUCTS_KEY).await;
        debug!(id = %product.id, "product created");
        Ok(product)
    }

    // == Update ==
    /// Replaces a product's fields, invalidates its entry and the full list,
    /// then eagerly re-reads the record and repopulates its entry so the
    /// next read is warm.
    ///
    /// Returns None when no record matched; no cache mutation occurs then.
    pub async fn update(&self, id: &str, fields: ProductFields) -> Result<Option<Product>> {
        if !self.store.update(id, fields).await? {
            return Ok(None);
        }

        let key = keys::product_key(id);
        self.invalidate(&key).await;
        self.invalidate(keys::ALL_PRODUCTS_KEY).await;

        let product = self.store.find_by_id(id).await?;
        if let Some(product) = &product {
            self.write_cached(&key, product, self.item_ttl).await;
        }
        debug!(id, "product updated");
        Ok(product)
    }

    // == Delete ==
    /// Removes a product and invalidates its entry and the full list.
    ///
    /// Returns false when no record matched; deleting twice reports failure
    /// on the second call, not an error.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        if !self.store.delete(id).await? {
            return Ok(false);
        }

        self.invalidate(&keys::product_key(id)).await;
        self.invalidate(keys::ALL_PRODUCTS_KEY).await;
        debug!(id, "product deleted");
        Ok(true)
    }

    // == Filter ==
    /// Returns products matching the filter, cache-aside under the filter's
    /// canonical key.
    ///
    /// Validation runs before any cache or store access. Filtered-list
    /// entries are never invalidated on write (the key space is unbounded),
    /// so they carry a weaker, TTL-only staleness bound than the full list
    /// and single-item entries.
    pub async fn filter(&self, query: FilterQuery) -> Result<Vec<Product>> {
        let filter = ProductFilter::parse(query)?;
        let key = filter.cache_key();

        if let Some(products) = self.read_cached::<Vec<Product>>(&key).await {
            return Ok(products);
        }

        let products = self.store.find(&filter.predicate()).await?;
        self.write_cached(&key, &products, self.list_ttl).await;
        Ok(products)
    }

    // == Stats ==
    /// Point-in-time hit/miss counters for the cache-aside read path.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // == Cache Helpers ==
    /// Cache read that records hit/miss and degrades a cache outage to a
    /// forced miss.
    async fn read_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get::<T>(key).await {
            Ok(Some(value)) => {
                self.stats.record_hit();
                debug!(key, "cache hit");
                Some(value)
            }
            Ok(None) => {
                self.stats.record_miss();
                debug!(key, "cache miss");
                None
            }
            Err(err) => {
                self.stats.record_miss();
                warn!(key, %err, "cache read failed, falling back to store");
                None
            }
        }
    }

    /// Cache repopulation; failure is logged and swallowed, the data was
    /// already served from the store.
    async fn write_cached<T: Serialize>(&self, key: &str, value: &T, ttl: u64) {
        if let Err(err) = self.cache.set(key, value, ttl).await {
            warn!(key, %err, "cache write failed, entry stays cold");
        }
    }

    /// Synchronous invalidation of one key.
    ///
    /// When the cache is unreachable the invalidation is skipped with a
    /// warning: the stale entry can then be served until its TTL elapses.
    /// That is the accepted bounded-staleness trade-off, not a fatal error.
    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            warn!(key, %err, "cache invalidation skipped, entry expires via TTL");
        }
    }
}
