//! # Device Signing Service
//!
//! Application service layer that implements the `DeviceSigningApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`DeviceSigningApi`)
//! - Uses the outbound ports (`DeviceStorage`, `KeyGenerator`)
//! - Owns the chaining protocol and the signing lock
//!
//! ## Concurrency
//!
//! One service-wide mutex serialises the whole
//! `read counter & tail -> sign -> advance -> persist` sequence for every
//! device. The guard is held until `update` returns and dropped on every exit
//! path, so the counters assigned to a device are exactly 0, 1, 2, ... with no
//! gaps or duplicates. Signing of different devices is serialised too; reads
//! (`get_device`, `list_devices`) never take this lock.

use crate::adapters::keygen::{KeyGenConfig, SoftwareKeyGenerator};
use crate::adapters::storage::InMemoryDeviceStorage;
use crate::domain::chain::encode_signature;
use crate::domain::entities::{Algorithm, CreateDeviceRequest, Device, SignatureRecord};
use crate::domain::errors::{SigningServiceError, StorageError};
use crate::ports::inbound::DeviceSigningApi;
use crate::ports::outbound::{DeviceStorage, KeyGenerator};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// Device Signing Service.
///
/// Generic over its storage and key generator so tests can inject failures.
pub struct DeviceSigningService<S: DeviceStorage, G: KeyGenerator = SoftwareKeyGenerator> {
    storage: S,
    key_generator: G,
    sign_lock: Mutex<()>,
}

impl DeviceSigningService<InMemoryDeviceStorage, SoftwareKeyGenerator> {
    /// Service backed by volatile in-memory storage and software keys.
    pub fn in_memory(config: KeyGenConfig) -> Self {
        Self::new(
            InMemoryDeviceStorage::new(),
            SoftwareKeyGenerator::new(config),
        )
    }
}

impl<S: DeviceStorage, G: KeyGenerator> DeviceSigningService<S, G> {
    /// Create a new signing service.
    ///
    /// # Arguments
    /// * `storage` - Device storage backend
    /// * `key_generator` - Produces the signer for each new device
    pub fn new(storage: S, key_generator: G) -> Self {
        Self {
            storage,
            key_generator,
            sign_lock: Mutex::new(()),
        }
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: DeviceStorage, G: KeyGenerator> DeviceSigningApi for DeviceSigningService<S, G> {
    fn create_device(&self, request: CreateDeviceRequest) -> Result<Device, SigningServiceError> {
        let CreateDeviceRequest {
            id,
            label,
            algorithm,
        } = request;

        // 1. Validate before doing any expensive work
        if id.is_empty() {
            return Err(SigningServiceError::InvalidInput(
                "Device ID is required".into(),
            ));
        }
        let algorithm: Algorithm = algorithm.parse()?;

        // 2. Generate the key pair and bind it to a signer
        let signer = self
            .key_generator
            .generate(algorithm)
            .map_err(|source| SigningServiceError::KeyGenerationFailed {
                id: id.clone(),
                source,
            })?;

        // 3. Counter 0, chain anchored at base64(id)
        let device = Device::new(id, label, signer);

        // 4. Insert; a duplicate id is a conflict, never an overwrite
        self.storage
            .save(device.clone())
            .map_err(|err| match err {
                StorageError::AlreadyExists { id } => {
                    warn!(device_id = %id, "Rejected duplicate device id");
                    SigningServiceError::AlreadyExists { id }
                }
                source => SigningServiceError::PersistenceFailed {
                    operation: "save",
                    id: Some(device.id.clone()),
                    source,
                },
            })?;

        info!(device_id = %device.id, %algorithm, "Signature device created");
        Ok(device)
    }

    fn sign_data(
        &self,
        device_id: &str,
        data: &str,
    ) -> Result<SignatureRecord, SigningServiceError> {
        let _guard = self.sign_lock.lock();

        let mut device = self
            .storage
            .get(device_id)
            .map_err(|err| lookup_error(device_id, err))?;

        let counter = device.signature_counter;
        let signed_data = device.next_payload(data);

        // A failed sign returns before anything is written
        let raw = device
            .signer()
            .sign(signed_data.as_bytes())
            .map_err(|source| SigningServiceError::SigningFailed {
                id: device_id.to_string(),
                source,
            })?;

        let signature = encode_signature(&raw);
        device.advance(signature.clone());

        self.storage
            .update(device)
            .map_err(|source| SigningServiceError::PersistenceFailed {
                operation: "update",
                id: Some(device_id.to_string()),
                source,
            })?;

        debug!(device_id, counter, "Data signed");
        Ok(SignatureRecord {
            signature,
            signed_data,
        })
    }

    fn get_device(&self, id: &str) -> Result<Device, SigningServiceError> {
        self.storage.get(id).map_err(|err| lookup_error(id, err))
    }

    fn list_devices(&self) -> Result<Vec<Device>, SigningServiceError> {
        self.storage
            .list_all()
            .map_err(|source| SigningServiceError::PersistenceFailed {
                operation: "list",
                id: None,
                source,
            })
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Map a storage read failure for `id`.
fn lookup_error(id: &str, err: StorageError) -> SigningServiceError {
    match err {
        StorageError::NotFound { id } => SigningServiceError::NotFound { id },
        source => SigningServiceError::PersistenceFailed {
            operation: "get",
            id: Some(id.to_string()),
            source,
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================
