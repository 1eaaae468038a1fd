//! Cache Module
//!
//! The cache side of the cache-aside layer: the backend seam, the in-memory
//! TTL backend, key derivation, the value codec, and hit/miss statistics.

mod backend;
mod client;
pub mod codec;
mod entry;
pub mod keys;
mod memory;
mod stats;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use backend::CacheBackend;
pub use client::CacheClient;
pub use entry::CacheEntry;
pub use memory::MemoryCache;
pub use stats::{CacheStats, StatsSnapshot};
