//! In-Memory Cache Backend
//!
//! TTL-expiring key-value map used as the default shared-cache backend.
//! Expired entries are dropped lazily on read and swept periodically by the
//! background cleanup task.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::backend::CacheBackend;
use crate::cache::entry::CacheEntry;
use crate::error::Result;

// == Memory Cache ==
/// In-process cache keyed by string, every entry carrying a TTL.
#[derive(Debug, Default)]
pub struct MemoryCache {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates a new empty MemoryCache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        // Fast path: shared lock, entry present and fresh
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => return Ok(Some(entry.value.clone())),
                None => return Ok(None),
                Some(_) => {}
            }
        }

        // Entry expired: upgrade to a write lock and drop it
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(key) {
            if entry.is_expired() {
                entries.remove(key);
                return Ok(None);
            }
            return Ok(Some(entry.value.clone()));
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: String, ttl_seconds: u64) -> Result<()> {
        let entry = CacheEntry::new(value, ttl_seconds);
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        // Idempotent: removing an absent key succeeds
        self.entries.write().await.remove(key);
        Ok(())
    }
}
