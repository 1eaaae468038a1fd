//! Catalog Cache - A product catalog service with a cache-aside read layer
//!
//! Reads check the cache first and fall back to the document store on a
//! miss; writes go to the store and synchronously invalidate the affected
//! cache entries. Staleness is bounded by per-entry TTLs.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use catalog::CatalogService;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
