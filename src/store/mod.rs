//! Store Module
//!
//! The persistent side of the cache-aside layer: the store trait, the query
//! predicate, and the in-memory document store implementation.

mod adapter;
mod memory;
mod predicate;

// Re-export public types
pub use adapter::ProductStore;
pub use memory::MemoryStore;
pub use predicate::ProductPredicate;
