//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address: a bare port ("8080"), ":port", or "host:port".
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_listen() -> String {
    ":8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerConfig {
    /// Resolve the configured listen address to a bindable "host:port".
    pub fn bind_addr(&self) -> crate::Result<String> {
        resolve_listen_addr(&self.listen)
    }
}

/// Normalize a listen address.
///
/// A bare port number gets a leading colon so it binds every interface.
/// Anything else, including ":port" and "host:port", is returned unchanged.
pub fn normalize_listen_addr(addr: &str) -> String {
    if !addr.is_empty() && addr.bytes().all(|b| b.is_ascii_digit()) {
        format!(":{addr}")
    } else {
        addr.to_string()
    }
}

/// Normalize `addr` into a "host:port" string suitable for binding.
///
/// ":port" expands to the IPv4 wildcard address. Hostnames are kept as-is and
/// resolved when the listener binds. The port must fit in a `u16`.
pub fn resolve_listen_addr(addr: &str) -> crate::Result<String> {
    let normalized = normalize_listen_addr(addr.trim());
    let full = match normalized.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None => normalized,
    };

    let invalid = |reason: &str| crate::Error::InvalidListenAddr(format!("{addr}: {reason}"));
    let (host, port) = full.rsplit_once(':').ok_or_else(|| invalid("missing port"))?;
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    port.parse::<u16>().map_err(|e| invalid(&format!("invalid port: {e}")))?;

    Ok(full)
}

/// PostgreSQL SSL mode configuration.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PgSslMode {
    /// Disable SSL/TLS entirely.
    Disable,
    /// Prefer SSL/TLS but allow unencrypted connections (default).
    #[default]
    Prefer,
    /// Require SSL/TLS for all connections.
    Require,
}

/// Database backend configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfig {
    /// PostgreSQL database holding the `tree_urls` table.
    Postgres {
        /// Connection URL. Takes precedence over individual fields.
        url: Option<String>,
        /// Database host.
        host: Option<String>,
        /// Database port (default: 5432).
        #[serde(default = "default_pg_port")]
        port: Option<u16>,
        /// Database username.
        username: Option<String>,
        /// Database password.
        /// Prefer TREE_URLS_DATABASE__PASSWORD over storing it in a file.
        password: Option<String>,
        /// Database name.
        database: Option<String>,
        /// SSL mode for connections.
        ssl_mode: Option<PgSslMode>,
        /// Maximum connections in the pool.
        #[serde(default = "default_max_connections")]
        max_connections: u32,
        /// Statement timeout in milliseconds.
        #[serde(default)]
        statement_timeout_ms: Option<u64>,
    },
    /// SQLite database file (local development).
    Sqlite {
        /// Database file path.
        path: PathBuf,
    },
    /// Process-local map; nothing survives a restart.
    Memory,
}

fn default_max_connections() -> u32 {
    10
}

fn default_pg_port() -> Option<u16> {
    Some(5432)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::Sqlite {
            path: PathBuf::from("./data/tree-urls.db"),
        }
    }
}

impl DatabaseConfig {
    /// Validate database configuration invariants.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            DatabaseConfig::Sqlite { .. } | DatabaseConfig::Memory => Ok(()),
            DatabaseConfig::Postgres {
                url,
                host,
                database,
                ..
            } => match (url.as_ref(), host.as_ref(), database.as_ref()) {
                (Some(_), _, _) => Ok(()),
                (None, Some(_), Some(_)) => Ok(()),
                (None, None, _) => Err(
                    "postgres config requires either 'url' or 'host' + 'database'".to_string(),
                ),
                (None, Some(_), None) => Err(
                    "postgres config requires 'database' when using individual fields"
                        .to_string(),
                ),
            },
        }
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
}
