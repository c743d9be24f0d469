//! Core domain types and shared logic for the tree-urls service.
//!
//! This crate defines the pieces used by both the store and the server:
//! - SHA1 record keys and their validation
//! - Configuration types
//! - Listen address normalization

pub mod config;
pub mod error;
pub mod sha1;

pub use error::{Error, Result};
pub use sha1::Sha1Key;
