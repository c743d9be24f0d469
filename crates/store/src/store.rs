//! Store trait for tree URL records.

use crate::error::StoreResult;
use async_trait::async_trait;
use treeurls_core::Sha1Key;

/// Storage for tree URL payloads keyed by SHA1.
///
/// Implementations hold at most one payload per key. Callers check
/// [`has_sha1`](Self::has_sha1) before choosing between insert and update.
#[async_trait]
pub trait TreeUrlStore: Send + Sync {
    /// Whether a record exists for `sha1`.
    async fn has_sha1(&self, sha1: &Sha1Key) -> StoreResult<bool>;

    /// All payloads stored for `sha1`. Empty when the key is unknown.
    async fn get_tree_urls(&self, sha1: &Sha1Key) -> StoreResult<Vec<String>>;

    /// Create a record. Fails with `AlreadyExists` if the key is present.
    async fn insert_tree_urls(&self, sha1: &Sha1Key, tree_urls: &str) -> StoreResult<()>;

    /// Replace the payload of an existing record. No-op for unknown keys.
    async fn update_tree_urls(&self, sha1: &Sha1Key, tree_urls: &str) -> StoreResult<()>;

    /// Remove the record for `sha1` if there is one.
    async fn delete_tree_urls(&self, sha1: &Sha1Key) -> StoreResult<()>;

    /// Check backend connectivity.
    async fn health_check(&self) -> StoreResult<()>;

    /// Release backend resources. Called once at shutdown.
    async fn close(&self) {}
}
