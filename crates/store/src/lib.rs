//! Tree URL storage abstraction and implementations.
//!
//! Records map a SHA1 key to one opaque payload string. Backends:
//! - PostgreSQL (production)
//! - SQLite (single-node and local development)
//! - In-memory (tests)

pub mod error;
pub mod memory;
pub mod postgres;
pub mod sqlite;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;
pub use store::TreeUrlStore;

use std::sync::Arc;
use treeurls_core::config::DatabaseConfig;

/// SQL for the `tree_urls` table.
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Create a store from configuration.
pub async fn from_config(config: &DatabaseConfig) -> StoreResult<Arc<dyn TreeUrlStore>> {
    config.validate().map_err(StoreError::Config)?;

    match config {
        DatabaseConfig::Memory => {
            tracing::warn!("Using in-memory store, records will not survive a restart");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn TreeUrlStore>)
        }
        DatabaseConfig::Sqlite { path } => {
            let store = SqliteStore::new(path).await?;
            Ok(Arc::new(store) as Arc<dyn TreeUrlStore>)
        }
        DatabaseConfig::Postgres {
            url,
            host,
            port,
            username,
            password,
            database,
            ssl_mode,
            max_connections,
            statement_timeout_ms,
        } => {
            let store = if let Some(url) = url {
                tracing::info!("Connecting to PostgreSQL using connection URL");
                PostgresStore::from_url(url, *max_connections, *statement_timeout_ms).await?
            } else if let (Some(host), Some(database)) = (host.as_ref(), database.as_ref()) {
                PostgresStore::from_params(
                    host,
                    port.unwrap_or(5432),
                    username.as_deref(),
                    password.as_deref(),
                    database,
                    *ssl_mode,
                    *max_connections,
                    *statement_timeout_ms,
                )
                .await?
            } else {
                return Err(StoreError::Config(
                    "postgres config requires either 'url' or 'host' + 'database'".to_string(),
                ));
            };
            Ok(Arc::new(store) as Arc<dyn TreeUrlStore>)
        }
    }
}
