//! HTTP API server for tree URL records.
//!
//! Routes:
//! - `GET /` greeting
//! - `GET|PUT|POST|DELETE /{sha1}` record access

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
