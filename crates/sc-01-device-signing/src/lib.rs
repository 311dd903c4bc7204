//! # Device Signing Subsystem (SC-01)
//!
//! Issues signature devices (key pairs) and produces a tamper-evident,
//! strictly ordered chain of signatures per device.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Devices, chain payloads, signers, errors. No I/O.
//! - **Ports Layer** (`ports/`): Inbound API and outbound storage / key generation traits
//! - **Adapters Layer** (`adapters/`): In-memory storage, software key generator
//! - **Service Layer** (`service.rs`): The chaining protocol and its lock
//!
//! ## Chaining
//!
//! ```text
//! signed_data(k) = "{k}_{data_k}_{signature(k-1)}"
//! signature(-1)  = base64(device_id)
//! ```
//!
//! Every signature covers the counter it was issued under and the previous
//! signature, so an auditor holding the sequence can detect gaps, duplicates
//! and reordering.
//!
//! ## Usage
//!
//! ```ignore
//! use sc_01_device_signing::{
//!     CreateDeviceRequest, DeviceSigningApi, DeviceSigningService, KeyGenConfig,
//! };
//!
//! let service = DeviceSigningService::in_memory(KeyGenConfig::default());
//! service.create_device(CreateDeviceRequest::new("d1", "till #1", "ECC"))?;
//! let signed = service.sign_data("d1", "tx1")?;
//! assert!(signed.signed_data.starts_with("0_tx1_"));
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-export public API
pub use adapters::keygen::{KeyGenConfig, KeyGenConfigError, SoftwareKeyGenerator};
pub use adapters::storage::InMemoryDeviceStorage;
pub use domain::chain::{build_signed_payload, encode_signature, genesis_signature};
pub use domain::crypto::{EcdsaSigner, RsaSigner, Signer};
pub use domain::entities::{Algorithm, CreateDeviceRequest, Device, SignatureRecord};
pub use domain::errors::{CryptoError, SigningServiceError, StorageError};
pub use ports::inbound::DeviceSigningApi;
pub use ports::outbound::{DeviceStorage, KeyGenerator};
pub use service::DeviceSigningService;
