//! SQLite-based store implementation.

use crate::SCHEMA_SQL;
use crate::error::{StoreError, StoreResult};
use crate::store::TreeUrlStore;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use treeurls_core::Sha1Key;

/// SQLite-based tree URL store.
///
/// Unlike the PostgreSQL store, this creates the `tree_urls` table on open.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path`.
    pub async fn new(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            // One writer at a time avoids "database is locked" under axum concurrency.
            .max_connections(1)
            .connect_with(opts)
            .await?;

        sqlx::query(SCHEMA_SQL).execute(&pool).await?;

        tracing::info!(path = %path.display(), "Opened SQLite store");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl TreeUrlStore for SqliteStore {
    async fn has_sha1(&self, sha1: &Sha1Key) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tree_urls WHERE sha1 = ?1)")
                .bind(sha1.as_str())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn get_tree_urls(&self, sha1: &Sha1Key) -> StoreResult<Vec<String>> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT tree_urls FROM tree_urls WHERE sha1 = ?1")
                .bind(sha1.as_str())
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn insert_tree_urls(&self, sha1: &Sha1Key, tree_urls: &str) -> StoreResult<()> {
        sqlx::query("INSERT INTO tree_urls (sha1, tree_urls) VALUES (?1, ?2)")
            .bind(sha1.as_str())
            .bind(tree_urls)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from_insert(e, sha1.as_str()))?;
        Ok(())
    }

    async fn update_tree_urls(&self, sha1: &Sha1Key, tree_urls: &str) -> StoreResult<()> {
        sqlx::query("UPDATE tree_urls SET tree_urls = ?2 WHERE sha1 = ?1")
            .bind(sha1.as_str())
            .bind(tree_urls)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_tree_urls(&self, sha1: &Sha1Key) -> StoreResult<()> {
        sqlx::query("DELETE FROM tree_urls WHERE sha1 = ?1")
            .bind(sha1.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
