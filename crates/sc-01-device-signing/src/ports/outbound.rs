//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the signing service needs the host to provide.
//!
//! Production: `InMemoryDeviceStorage`, `SoftwareKeyGenerator` (adapters/)
//! Testing: `test_helpers::FailingStorage`, `test_helpers::StaticKeyGenerator`

use crate::domain::crypto::Signer;
use crate::domain::entities::{Algorithm, Device};
use crate::domain::errors::{CryptoError, StorageError};
use std::sync::Arc;

/// Map from device id to device record.
///
/// ## Concurrency
///
/// `get` / `list_all` may run concurrently with each other; `save` / `update`
/// are exclusive with every other call. No call may observe a partially
/// written record. Returned devices are independent copies.
pub trait DeviceStorage: Send + Sync {
    /// Insert a new device.
    ///
    /// # Errors
    /// * `StorageError::AlreadyExists` - the id is taken; the stored record is not touched
    fn save(&self, device: Device) -> Result<(), StorageError>;

    /// Replace the record for `device.id`, inserting it if absent.
    fn update(&self, device: Device) -> Result<(), StorageError>;

    /// Fetch a copy of one device.
    ///
    /// # Errors
    /// * `StorageError::NotFound` - unknown id
    fn get(&self, id: &str) -> Result<Device, StorageError>;

    /// Copies of all devices, in unspecified order.
    fn list_all(&self) -> Result<Vec<Device>, StorageError>;
}

/// Produces the signer (and thereby the key pair) for a new device.
pub trait KeyGenerator: Send + Sync {
    /// Generate a key pair for `algorithm` and bind it to a signer.
    fn generate(&self, algorithm: Algorithm) -> Result<Arc<dyn Signer>, CryptoError>;
}

impl<T: DeviceStorage + ?Sized> DeviceStorage for Arc<T> {
    fn save(&self, device: Device) -> Result<(), StorageError> {
        (**self).save(device)
    }

    fn update(&self, device: Device) -> Result<(), StorageError> {
        (**self).update(device)
    }

    fn get(&self, id: &str) -> Result<Device, StorageError> {
        (**self).get(id)
    }

    fn list_all(&self) -> Result<Vec<Device>, StorageError> {
        (**self).list_all()
    }
}
