//! In-Memory Product Store
//!
//! Document-store implementation backed by a map, used as the default
//! persistent collection and by the test suites. Identifiers are assigned on
//! insert.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Product, ProductFields};
use crate::store::{ProductPredicate, ProductStore};

// == Memory Store ==
/// In-process product collection keyed by identifier.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Product>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of records in the collection.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find(&self, predicate: &ProductPredicate) -> Result<Vec<Product>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|product| predicate.matches(product))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn insert(&self, fields: ProductFields) -> Result<Product> {
        let id = Uuid::new_v4().to_string();
        let product = Product::from_fields(id.clone(), fields);
        self.records.write().await.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: &str, fields: ProductFields) -> Result<bool> {
        let mut records = self.records.write().await;
        match records.get_mut(id) {
            Some(existing) => {
                *existing = Product::from_fields(id, fields);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.records.write().await.remove(id).is_some())
    }
}
