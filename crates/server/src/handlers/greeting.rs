//! Greeting and fallback endpoints.

use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Body of `GET /`.
pub const GREETING: &str = "Hello from tree-urls.";

/// GET /
pub async fn greeting() -> &'static str {
    GREETING
}

/// Fallback for unmatched routes.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {method} {}", uri.path()))
}
