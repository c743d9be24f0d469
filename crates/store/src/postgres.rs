//! PostgreSQL-based store implementation.

use crate::error::{StoreError, StoreResult};
use crate::store::TreeUrlStore;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode as SqlxPgSslMode};
use sqlx::{Pool, Postgres};
use std::str::FromStr;
use treeurls_core::Sha1Key;
use treeurls_core::config::PgSslMode;

/// Build connection options from individual parameters.
fn params_connect_options(
    host: &str,
    port: u16,
    username: Option<&str>,
    password: Option<&str>,
    database: &str,
    ssl_mode: Option<PgSslMode>,
) -> PgConnectOptions {
    let mut opts = PgConnectOptions::new()
        .host(host)
        .port(port)
        .database(database);

    if let Some(user) = username {
        opts = opts.username(user);
    }

    if let Some(pass) = password {
        opts = opts.password(pass);
    }

    if let Some(mode) = ssl_mode {
        let sqlx_mode = match mode {
            PgSslMode::Disable => SqlxPgSslMode::Disable,
            PgSslMode::Prefer => SqlxPgSslMode::Prefer,
            PgSslMode::Require => SqlxPgSslMode::Require,
        };
        opts = opts.ssl_mode(sqlx_mode);
    }

    opts
}

/// Attach a server-side `statement_timeout` when one is configured.
fn with_statement_timeout(opts: PgConnectOptions, timeout_ms: Option<u64>) -> PgConnectOptions {
    match timeout_ms {
        Some(timeout_ms) => {
            tracing::info!("PostgreSQL statement_timeout set to {}ms", timeout_ms);
            opts.options([("statement_timeout", format!("{}ms", timeout_ms))])
        }
        None => opts,
    }
}

/// PostgreSQL-based tree URL store.
///
/// Expects the `tree_urls` table to exist already; see `schema.sql`.
pub struct PostgresStore {
    pool: Pool<Postgres>,
}

impl PostgresStore {
    /// Create a new PostgreSQL store from a connection URL.
    pub async fn from_url(
        url: &str,
        max_connections: u32,
        statement_timeout_ms: Option<u64>,
    ) -> StoreResult<Self> {
        let opts = PgConnectOptions::from_str(url)?;
        Self::connect(opts, max_connections, statement_timeout_ms).await
    }

    /// Create a new PostgreSQL store from individual connection parameters.
    #[allow(clippy::too_many_arguments)]
    pub async fn from_params(
        host: &str,
        port: u16,
        username: Option<&str>,
        password: Option<&str>,
        database: &str,
        ssl_mode: Option<PgSslMode>,
        max_connections: u32,
        statement_timeout_ms: Option<u64>,
    ) -> StoreResult<Self> {
        let opts = params_connect_options(host, port, username, password, database, ssl_mode);

        // Log connection info without password
        tracing::info!(
            host = host,
            port = port,
            database = database,
            username = username.unwrap_or("<none>"),
            ssl_mode = ?ssl_mode,
            "Connecting to PostgreSQL with individual parameters"
        );

        Self::connect(opts, max_connections, statement_timeout_ms).await
    }

    async fn connect(
        opts: PgConnectOptions,
        max_connections: u32,
        statement_timeout_ms: Option<u64>,
    ) -> StoreResult<Self> {
        let opts = with_statement_timeout(opts, statement_timeout_ms);

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(opts)
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}

#[async_trait]
impl TreeUrlStore for PostgresStore {
    async fn has_sha1(&self, sha1: &Sha1Key) -> StoreResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tree_urls WHERE sha1 = $1)")
                .bind(sha1.as_str())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn get_tree_urls(&self, sha1: &Sha1Key) -> StoreResult<Vec<String>> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT tree_urls FROM tree_urls WHERE sha1 = $1")
                .bind(sha1.as_str())
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn insert_tree_urls(&self, sha1: &Sha1Key, tree_urls: &str) -> StoreResult<()> {
        sqlx::query("INSERT INTO tree_urls (sha1, tree_urls) VALUES ($1, $2)")
            .bind(sha1.as_str())
            .bind(tree_urls)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from_insert(e, sha1.as_str()))?;
        Ok(())
    }

    async fn update_tree_urls(&self, sha1: &Sha1Key, tree_urls: &str) -> StoreResult<()> {
        // ONLY keeps the update off tables inheriting from tree_urls.
        sqlx::query("UPDATE ONLY tree_urls SET tree_urls = $2 WHERE sha1 = $1")
            .bind(sha1.as_str())
            .bind(tree_urls)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_tree_urls(&self, sha1: &Sha1Key) -> StoreResult<()> {
        sqlx::query("DELETE FROM tree_urls WHERE sha1 = $1")
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
