//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} is not a valid SHA1 hash")]
    InvalidSha1(String),

    #[error("invalid listen address: {0}")]
    InvalidListenAddr(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
