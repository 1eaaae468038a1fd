//! Product Store Trait
//!
//! CRUD and predicate-filtered queries against the persistent collection.
//! The store is the source of truth; the cache layer falls back to it on
//! every miss.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Product, ProductFields};
use crate::store::ProductPredicate;

// == Product Store ==
/// Operations against the persistent product collection.
///
/// "Not found" is reported through `Option` and `bool` returns, never as an
/// error; errors (`StoreUnavailable`) are reserved for transport or storage
/// failure. Implementations must be safe for concurrent use.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetches a record by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>>;

    /// Fetches all records matching the predicate. Result sets are expected
    /// small, so matches are materialized fully.
    async fn find(&self, predicate: &ProductPredicate) -> Result<Vec<Product>>;

    /// Fetches every record in the collection.
    async fn find_all(&self) -> Result<Vec<Product>>;

    /// Inserts a new record, assigning an identifier, and returns it.
    async fn insert(&self, fields: ProductFields) -> Result<Product>;

    /// Replaces the fields of an existing record.
    ///
    /// Returns true when a record matched, false otherwise.
    async fn update(&self, id: &str, fields: ProductFields) -> Result<bool>;

    /// Removes a record.
    ///
    /// Returns true when a record was removed, false otherwise.
    async fn delete(&self, id: &str) -> Result<bool>;
}
