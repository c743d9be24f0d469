//! Tree URL record endpoints.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use treeurls_core::Sha1Key;

/// Response for PUT/POST.
#[derive(Debug, Serialize, Deserialize)]
pub struct TreeUrlsResponse {
    /// The payload that was stored.
    pub tree_urls: String,
}

fn parse_sha1(raw: &str) -> ApiResult<Sha1Key> {
    Ok(Sha1Key::new(raw)?)
}

/// GET /{sha1}
///
/// Responds with the stored payload verbatim as JSON. The payload is usually
/// a JSON array already; `[]` is sent if the key exists without rows.
pub async fn get_tree_urls(
    State(state): State<AppState>,
    Path(sha1): Path<String>,
) -> ApiResult<Response> {
    let sha1 = parse_sha1(&sha1)?;

    if !state.store.has_sha1(&sha1).await? {
        return Err(ApiError::NotFound(format!("{sha1} was not found")));
    }

    let records = state.store.get_tree_urls(&sha1).await?;
    let body = records
        .into_iter()
        .next()
        .unwrap_or_else(|| "[]".to_string());

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// PUT /{sha1} and POST /{sha1}
///
/// Inserts the body for an unseen key, otherwise replaces the stored payload.
pub async fn put_tree_urls(
    State(state): State<AppState>,
    Path(sha1): Path<String>,
    body: String,
) -> ApiResult<Json<TreeUrlsResponse>> {
    let sha1 = parse_sha1(&sha1)?;

    if state.store.has_sha1(&sha1).await? {
        state.store.update_tree_urls(&sha1, &body).await?;
        tracing::debug!(sha1 = %sha1, "Updated tree urls");
    } else {
        state.store.insert_tree_urls(&sha1, &body).await?;
        tracing::debug!(sha1 = %sha1, "Inserted tree urls");
    }

    Ok(Json(TreeUrlsResponse { tree_urls: body }))
}

/// DELETE /{sha1}
pub async fn delete_tree_urls(
    State(state): State<AppState>,
    Path(sha1): Path<String>,
) -> ApiResult<StatusCode> {
    let sha1 = parse_sha1(&sha1)?;
    state.store.delete_tree_urls(&sha1).await?;
    tracing::debug!(sha1 = %sha1, "Deleted tree urls");
    Ok(StatusCode::OK)
}
