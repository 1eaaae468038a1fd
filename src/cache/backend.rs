//! Cache Backend Trait
//!
//! Key-value seam between the catalog and whatever shared cache the process
//! is wired to. The bundled implementation is [`crate::cache::MemoryCache`];
//! a networked backend implements the same trait.

use async_trait::async_trait;

use crate::error::Result;

// == Cache Backend ==
/// Key-value operations against the shared cache.
///
/// Implementations must be safe for concurrent use; the coordinator shares a
/// single handle across all callers. Failures surface as
/// `CatalogError::CacheUnavailable` and are treated by the coordinator as a
/// forced miss (reads) or a skipped invalidation (writes).
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Retrieves the raw serialized value for `key`, or None when the key is
    /// absent or its TTL has elapsed.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, expiring after `ttl_seconds`.
    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()>;

    /// Removes `key` unconditionally. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}
