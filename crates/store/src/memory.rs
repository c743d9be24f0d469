//! In-memory store used by tests and the `memory` database type.

use crate::error::{StoreError, StoreResult};
use crate::store::TreeUrlStore;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use treeurls_core::Sha1Key;

/// Tree URL store backed by a process-local map.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl TreeUrlStore for MemoryStore {
    async fn has_sha1(&self, sha1: &Sha1Key) -> StoreResult<bool> {
        Ok(self.records.read().await.contains_key(sha1.as_str()))
    }

    async fn get_tree_urls(&self, sha1: &Sha1Key) -> StoreResult<Vec<String>> {
        Ok(self
            .records
            .read()
            .await
            .get(sha1.as_str())
            .cloned()
            .into_iter()
            .collect())
    }

    async fn insert_tree_urls(&self, sha1: &Sha1Key, tree_urls: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(sha1.as_str()) {
            return Err(StoreError::AlreadyExists(sha1.to_string()));
        }
        records.insert(sha1.to_string(), tree_urls.to_string());
        Ok(())
    }

    async fn update_tree_urls(&self, sha1: &Sha1Key, tree_urls: &str) -> StoreResult<()> {
        if let Some(existing) = self.records.write().await.get_mut(sha1.as_str()) {
            *existing = tree_urls.to_string();
        }
        Ok(())
    }

    async fn delete_tree_urls(&self, sha1: &Sha1Key) -> StoreResult<()> {
        self.records.write().await.remove(sha1.as_str());
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
