//! Cache Client
//!
//! Typed wrapper over a [`CacheBackend`] handle. Values pass through the
//! cache entry codec on the way in and out; a cached payload that no longer
//! decodes is deleted and reported as a miss rather than surfacing an error.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::cache::backend::CacheBackend;
use crate::cache::codec;
use crate::error::Result;

// == Cache Client ==
/// Shared handle for typed key-value operations against the cache.
#[derive(Clone)]
pub struct CacheClient {
    backend: Arc<dyn CacheBackend>,
}

impl CacheClient {
    /// Creates a client over the given backend handle.
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self { backend }
    }

    // == Get ==
    /// Fetches and decodes the value under `key`.
    ///
    /// Returns None when the key is absent, expired, or holds a payload that
    /// no longer decodes (the corrupt entry is dropped so the next write
    /// starts clean). Backend failures propagate as `CacheUnavailable`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get(key).await? else {
            return Ok(None);
        };

        match codec::decode(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(key, %err, "dropping cache entry with undecodable payload");
                self.backend.delete(key).await?;
                Ok(None)
            }
        }
    }

    // == Set ==
    /// Encodes and stores `value` under `key` with the given TTL.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl_seconds: u64) -> Result<()> {
        match codec::encode(value) {
            Ok(raw) => self.backend.set(key, raw, ttl_seconds).await,
            Err(err) => {
                // Domain types always encode; if one ever does not, skip the
                // cache write rather than failing the read path.
                warn!(key, %err, "skipping cache write for unencodable value");
                Ok(())
            }
        }
    }

    // == Delete ==
    /// Removes `key` from the cache. Idempotent.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.backend.delete(key).await
    }
}
