//! Store test doubles.

use async_trait::async_trait;
use treeurls_core::Sha1Key;
use treeurls_store::{StoreError, StoreResult, TreeUrlStore};

/// A store whose every operation fails, for exercising 500 responses.
#[allow(dead_code)]
pub struct FailingStore;

#[allow(dead_code)]
fn failure() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl TreeUrlStore for FailingStore {
    async fn has_sha1(&self, _sha1: &Sha1Key) -> StoreResult<bool> {
        Err(failure())
    }

    async fn get_tree_urls(&self, _sha1: &Sha1Key) -> StoreResult<Vec<String>> {
        Err(failure())
    }

    async fn insert_tree_urls(&self, _sha1: &Sha1Key, _tree_urls: &str) -> StoreResult<()> {
        Err(failure())
    }

    async fn update_tree_urls(&self, _sha1: &Sha1Key, _tree_urls: &str) -> StoreResult<()> {
        Err(failure())
    }

    async fn delete_tree_urls(&self, _sha1: &Sha1Key) -> StoreResult<()> {
        Err(failure())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(failure())
    }
}
