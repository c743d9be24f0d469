//! API error types and plain-text error responses.

use axum::http::StatusCode;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use treeurls_store::StoreError;

/// Body sent for store failures; the underlying error is only logged.
const STORE_FAILURE_MESSAGE: &str = "error accessing tree urls";

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Core(#[from] treeurls_core::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Core(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Core(e) => bad_request(&e.to_string()),
            Self::NotFound(msg) => not_found(msg),
            Self::Store(e) => {
                tracing::error!(error = %e, "Store operation failed");
                errored(STORE_FAILURE_MESSAGE)
            }
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

fn plain_text(status: StatusCode, msg: &str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("{msg}\n"),
    )
        .into_response()
}

/// 400 with `msg` as a newline-terminated plain-text body.
pub fn bad_request(msg: &str) -> Response {
    plain_text(StatusCode::BAD_REQUEST, msg)
}

/// 404 with `msg` as a newline-terminated plain-text body.
pub fn not_found(msg: &str) -> Response {
    plain_text(StatusCode::NOT_FOUND, msg)
}

/// 500 with `msg` as a newline-terminated plain-text body.
pub fn errored(msg: &str) -> Response {
    plain_text(StatusCode::INTERNAL_SERVER_ERROR, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request() {
        let response = bad_request("test message");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "test message\n");
    }

    #[tokio::test]
    async fn test_not_found() {
        let response = not_found("test message");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, "test message\n");
    }

    #[tokio::test]
    async fn test_errored() {
        let response = errored("test message");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "test message\n");
    }

    #[tokio::test]
    async fn test_store_error_does_not_leak_details() {
        let err = ApiError::Store(StoreError::Config("secret dsn".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_string(response).await;
        assert!(!body.contains("secret"));
        assert_eq!(body, format!("{STORE_FAILURE_MESSAGE}\n"));
    }

    #[test]
    fn test_invalid_sha1_maps_to_bad_request() {
        let err: ApiError = treeurls_core::Error::InvalidSha1("xyz".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "xyz is not a valid SHA1 hash");
    }
}
