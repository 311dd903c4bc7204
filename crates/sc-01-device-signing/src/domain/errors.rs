//! # Signing Errors
//!
//! Error types for device creation, signing and storage.
//!
//! ## Design Principles
//!
//! - Port-level errors (`CryptoError`, `StorageError`) stay close to their source
//! - The service wraps them with the operation and device id
//! - No variant is retried automatically; all failures are non-transient

use thiserror::Error;

/// Errors raised by key generation and signing primitives.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The key pair could not be generated or encoded
    #[error("{algorithm} key generation failed: {reason}")]
    KeyGeneration {
        algorithm: &'static str,
        reason: String,
    },

    /// The signing primitive rejected the payload or key state
    #[error("{algorithm} signing failed: {reason}")]
    Signing {
        algorithm: &'static str,
        reason: String,
    },
}

/// Errors raised by a `DeviceStorage` implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// A device with this id is already stored
    #[error("device {id} already exists")]
    AlreadyExists { id: String },

    /// No device with this id is stored
    #[error("device {id} not found")]
    NotFound { id: String },

    /// The backing medium failed
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Errors returned by the signing service.
///
/// The gateway maps these to response codes; see `sc-02-api-gateway`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningServiceError {
    /// Malformed or missing request fields
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested signing scheme is not supported
    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    /// A device with this id already exists
    #[error("device {id} already exists")]
    AlreadyExists { id: String },

    /// No device with this id exists
    #[error("device {id} not found")]
    NotFound { id: String },

    /// Key pair generation failed while creating a device
    #[error("failed to generate key pair for device {id}: {source}")]
    KeyGenerationFailed {
        id: String,
        #[source]
        source: CryptoError,
    },

    /// The device's signer failed; no state was changed
    #[error("failed to sign data with device {id}: {source}")]
    SigningFailed {
        id: String,
        #[source]
        source: CryptoError,
    },

    /// Storage failed. `id` is `None` for operations over all devices.
    ///
    /// After a successful sign this is ambiguous: re-query the device
    /// before retrying.
    #[error("failed to {operation} {}: {source}", persistence_subject(.id))]
    PersistenceFailed {
        operation: &'static str,
        id: Option<String>,
        #[source]
        source: StorageError,
    },
}

fn persistence_subject(id: &Option<String>) -> String {
    match id {
        Some(id) => format!("device {id}"),
        None => "devices".to_owned(),
    }
}

impl SigningServiceError {
    /// Whether the error is the duplicate-id conflict on create.
    pub fn is_conflict(&self) -> bool {
        matches!(self, SigningServiceError::AlreadyExists { .. })
    }

    /// Whether the error reports an unknown device id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SigningServiceError::NotFound { .. })
    }
}
