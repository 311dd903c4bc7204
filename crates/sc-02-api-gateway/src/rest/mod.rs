//! REST handlers.
//!
//! Signing and key generation are CPU bound and take the service's signing
//! lock, so every call into `DeviceSigningApi` runs on the blocking pool.

pub mod devices;
pub mod health;

use crate::domain::error::{ApiError, ApiResult};
use axum::body::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Run a blocking closure on the blocking thread pool.
///
/// If the caller goes away the closure still runs to completion.
pub(crate) async fn run_blocking<F, T>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> ApiResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Decode a JSON request body; any failure is a 400.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        ApiError::bad_request("Invalid request body")
    })
}
