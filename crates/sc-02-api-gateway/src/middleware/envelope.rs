//! Error envelope for framework rejections.
//!
//! Routing misses (404), wrong methods (405) and body limit violations (413)
//! are produced by axum and tower-http as plain text. This rewrites any error
//! response that is not already JSON into `{"errors": [...]}`, keeping the
//! status and the `Allow` header.

use crate::domain::error::ApiError;
use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

/// `axum::middleware::map_response` hook.
pub async fn envelope_rejections(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let reason = status.canonical_reason().unwrap_or("Request failed");

    let mut rewritten = ApiError::new(status, reason).into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(ALLOW, allow);
    }
    rewritten
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}
