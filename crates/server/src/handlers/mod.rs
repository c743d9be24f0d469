//! HTTP request handlers.

pub mod greeting;
pub mod tree_urls;

pub use greeting::*;
pub use tree_urls::*;
