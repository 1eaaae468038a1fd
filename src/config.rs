//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The cache and store endpoints are handed to whichever backend is wired in at
/// startup; the bundled in-process backends only log them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared cache host
    pub cache_host: String,
    /// Shared cache port
    pub cache_port: u16,
    /// Persistent store connection URI
    pub store_uri: String,
    /// Persistent store database name
    pub store_db: String,
    /// TTL in seconds for single-product cache entries
    pub item_cache_ttl: u64,
    /// TTL in seconds for list and filtered-list cache entries
    pub list_cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Background cache sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_HOST` - Shared cache host (default: localhost)
    /// - `CACHE_PORT` - Shared cache port (default: 6379)
    /// - `STORE_URI` - Store connection URI (default: memory://localhost)
    /// - `STORE_DB` - Store database name (default: product_catalog)
    /// - `ITEM_CACHE_TTL` - Single-product TTL in seconds (default: 600)
    /// - `LIST_CACHE_TTL` - List TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cache sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self {
            cache_host: env::var("CACHE_HOST").unwrap_or_else(|_| "localhost".to_string()),
            cache_port: env::var("CACHE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6379),
            store_uri: env::var("STORE_URI").unwrap_or_else(|_| "memory://localhost".to_string()),
            store_db: env::var("STORE_DB").unwrap_or_else(|_| "product_catalog".to_string()),
            item_cache_ttl: env::var("ITEM_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
            list_cache_ttl: env::var("LIST_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_host: "localhost".to_string(),
            cache_port: 6379,
            store_uri: "memory://localhost".to_string(),
            store_db: "product_catalog".to_string(),
            item_cache_ttl: 600,
            list_cache_ttl: 300,
            server_port: 3000,
            cleanup_interval: 1,
        }
    }
}
