//! Error conversions from the signing subsystem and the runtime.
//!
//! Status mapping:
//!
//! | Service error                     | Status |
//! |-----------------------------------|--------|
//! | `InvalidInput`                    | 400    |
//! | `AlreadyExists`                   | 409    |
//! | `NotFound` on device lookup       | 404    |
//! | everything else, incl. `NotFound` while signing | 500 |

use crate::domain::ApiError;
use sc_01_device_signing::SigningServiceError;
use tracing::warn;

/// Map a service error, using `context` as the message for opaque failures.
///
/// Validation and conflict errors carry their own message; storage, key and
/// signing failures are reported as `context` so internals do not leak.
pub fn service_error(err: SigningServiceError, context: &'static str) -> ApiError {
    match err {
        SigningServiceError::InvalidInput(message) => ApiError::bad_request(message),
        SigningServiceError::AlreadyExists { .. } => ApiError::conflict(err.to_string()),
        SigningServiceError::InvalidAlgorithm(_) => ApiError::internal(err.to_string()),
        other => {
            warn!(error = %other, "{context}");
            ApiError::internal(context)
        }
    }
}

/// Map a service error from a single-device read; unknown ids become 404.
pub fn lookup_error(err: SigningServiceError, context: &'static str) -> ApiError {
    if err.is_not_found() {
        ApiError::not_found(err.to_string())
    } else {
        service_error(err, context)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::internal(format!("worker task failed: {e}"))
    }
}
