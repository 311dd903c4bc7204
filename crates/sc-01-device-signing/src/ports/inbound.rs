//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the signing subsystem.

use crate::domain::entities::{CreateDeviceRequest, Device, SignatureRecord};
use crate::domain::errors::SigningServiceError;

/// Primary Device Signing API.
///
/// Implementations must be thread-safe (`Send + Sync`). All methods are
/// blocking; signing and key generation are CPU-bound, so async callers
/// should run them on a blocking pool.
pub trait DeviceSigningApi: Send + Sync {
    /// Create a device with a fresh key pair, counter 0 and the genesis chain value.
    ///
    /// # Errors
    /// * `InvalidInput` - `id` is empty
    /// * `InvalidAlgorithm` - `algorithm` is not `"RSA"` or `"ECC"`
    /// * `KeyGenerationFailed` - the key pair could not be generated
    /// * `AlreadyExists` - a device with this id exists; it is left unchanged
    /// * `PersistenceFailed` - storage rejected the insert
    fn create_device(&self, request: CreateDeviceRequest) -> Result<Device, SigningServiceError>;

    /// Sign `data` with the device's key and advance its chain.
    ///
    /// The signed payload is `"{counter}_{data}_{last_signature}"` using the
    /// counter value before the increment.
    ///
    /// # Errors
    /// * `NotFound` - unknown device id
    /// * `SigningFailed` - the signer failed; counter and chain tail are unchanged
    /// * `PersistenceFailed` - the updated device could not be stored
    fn sign_data(&self, device_id: &str, data: &str)
        -> Result<SignatureRecord, SigningServiceError>;

    /// Look up one device.
    fn get_device(&self, id: &str) -> Result<Device, SigningServiceError>;

    /// All devices, in no particular order. Empty when none exist.
    fn list_devices(&self) -> Result<Vec<Device>, SigningServiceError>;
}
