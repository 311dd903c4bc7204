//! # Domain Entities
//!
//! Core data structures for signature devices.

use super::chain::{build_signed_payload, genesis_signature};
use super::crypto::Signer;
use super::errors::SigningServiceError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

// =============================================================================
// Algorithm
// =============================================================================

/// Signing scheme bound to a device at creation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RSA, PKCS#1 v1.5 over SHA-256
    Rsa,
    /// ECDSA over secp256k1 with SHA-256, DER encoded
    Ecc,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 2] = [Algorithm::Rsa, Algorithm::Ecc];

    /// Wire name (`"RSA"` / `"ECC"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Rsa => "RSA",
            Algorithm::Ecc => "ECC",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SigningServiceError;

    /// Names are matched exactly; `"rsa"` is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RSA" => Ok(Algorithm::Rsa),
            "ECC" => Ok(Algorithm::Ecc),
            other => Err(SigningServiceError::InvalidAlgorithm(other.to_string())),
        }
    }
}

// =============================================================================
// Requests / Results
// =============================================================================

/// Input for device creation.
///
/// `algorithm` is kept textual so that validation happens inside the service
/// and surfaces as `InvalidAlgorithm`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateDeviceRequest {
    pub id: String,
    pub label: String,
    pub algorithm: String,
}

impl CreateDeviceRequest {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        algorithm: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            algorithm: algorithm.into(),
        }
    }
}

/// Result of one signing operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureRecord {
    /// Base64 of the raw signature bytes
    pub signature: String,
    /// The exact string that was signed: `"{counter}_{data}_{previous}"`
    pub signed_data: String,
}

// =============================================================================
// Device
// =============================================================================

/// A signature device.
///
/// Cloning a device copies its counter and chain tail; the signer handle is
/// shared because it is immutable after creation.
#[derive(Clone)]
pub struct Device {
    /// Client supplied, immutable primary key
    pub id: String,
    /// Free-form display text
    pub label: String,
    /// Algorithm of the bound signer
    pub algorithm: Algorithm,
    /// Number of completed signatures
    pub signature_counter: u64,
    /// Base64 of the last signature, or of `id` before the first one
    pub last_signature: String,
    signer: Arc<dyn Signer>,
}

impl Device {
    /// Create a device at the start of its chain.
    pub fn new(id: impl Into<String>, label: impl Into<String>, signer: Arc<dyn Signer>) -> Self {
        let id = id.into();
        let last_signature = genesis_signature(&id);
        Self {
            algorithm: signer.algorithm(),
            label: label.into(),
            signature_counter: 0,
            last_signature,
            signer,
            id,
        }
    }

    /// The payload the next signature must cover.
    pub fn next_payload(&self, data: &str) -> String {
        build_signed_payload(self.signature_counter, data, &self.last_signature)
    }

    /// Record a completed signature as the new chain tail.
    pub fn advance(&mut self, signature_b64: String) {
        self.last_signature = signature_b64;
        self.signature_counter += 1;
    }

    /// The bound signer.
    pub fn signer(&self) -> &dyn Signer {
        self.signer.as_ref()
    }

    /// DER (SubjectPublicKeyInfo) encoding of the device public key.
    pub fn public_key_der(&self) -> &[u8] {
        self.signer.public_key_der()
    }
}

impl fmt::Debug for Device {
    // Key material is never printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("algorithm", &self.algorithm)
            .field("signature_counter", &self.signature_counter)
            .field("last_signature", &self.last_signature)
            .finish_non_exhaustive()
    }
}
