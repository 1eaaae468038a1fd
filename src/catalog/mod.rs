//! Catalog Module
//!
//! The cache-aside coordinator and the filter query builder.

mod filter;
mod service;

// Re-export public types
pub use filter::ProductFilter;
pub use service::CatalogService;
