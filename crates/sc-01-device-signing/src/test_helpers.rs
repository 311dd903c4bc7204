//! Test doubles for the outbound ports.
//!
//! Compiled for unit tests and, behind the `test-helpers` feature, for the
//! workspace integration test crate.

use crate::adapters::keygen::{KeyGenConfig, SoftwareKeyGenerator};
use crate::adapters::storage::InMemoryDeviceStorage;
use crate::domain::crypto::Signer;
use crate::domain::entities::{Algorithm, Device};
use crate::domain::errors::{CryptoError, StorageError};
use crate::ports::outbound::{DeviceStorage, KeyGenerator};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// RSA modulus used by tests; small enough for fast debug-mode key generation.
pub const TEST_RSA_KEY_BITS: usize = 1024;

/// Real key generator with the test RSA modulus.
pub fn fast_key_generator() -> SoftwareKeyGenerator {
    SoftwareKeyGenerator::new(KeyGenConfig {
        rsa_key_bits: TEST_RSA_KEY_BITS,
    })
}

/// Signer that returns a fixed signature.
#[derive(Debug, Clone)]
pub struct StaticSigner {
    algorithm: Algorithm,
    signature: Vec<u8>,
}

impl StaticSigner {
    pub fn rsa(signature: Vec<u8>) -> Self {
        Self {
            algorithm: Algorithm::Rsa,
            signature,
        }
    }

    pub fn ecc(signature: Vec<u8>) -> Self {
        Self {
            algorithm: Algorithm::Ecc,
            signature,
        }
    }
}

impl Signer for StaticSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, _payload: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(self.signature.clone())
    }

    fn public_key_der(&self) -> &[u8] {
        &[]
    }
}

/// Signer that always fails.
#[derive(Debug, Clone)]
pub struct FailingSigner {
    algorithm: Algorithm,
}

impl FailingSigner {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}

impl Signer for FailingSigner {
    fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    fn sign(&self, _payload: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Err(CryptoError::Signing {
            algorithm: self.algorithm.as_str(),
            reason: "malformed key state".into(),
        })
    }

    fn public_key_der(&self) -> &[u8] {
        &[]
    }
}

/// Signer that sleeps before returning a fixed signature.
#[derive(Debug, Clone)]
pub struct SlowSigner {
    inner: StaticSigner,
    delay: Duration,
}

impl SlowSigner {
    pub fn new(algorithm: Algorithm, delay: Duration) -> Self {
        Self {
            inner: StaticSigner {
                algorithm,
                signature: b"slow-signature".to_vec(),
            },
            delay,
        }
    }
}

impl Signer for SlowSigner {
    fn algorithm(&self) -> Algorithm {
        self.inner.algorithm
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CryptoError> {
        std::thread::sleep(self.delay);
        self.inner.sign(payload)
    }

    fn public_key_der(&self) -> &[u8] {
        &[]
    }
}

/// Key generator with scripted behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKeyGenerator {
    /// Hands out `StaticSigner`s
    Static,
    /// Hands out `FailingSigner`s
    FailingSigner,
    /// Fails to generate
    FailingGeneration,
    /// Hands out `SlowSigner`s with this delay
    Slow(Duration),
}

impl KeyGenerator for MockKeyGenerator {
    fn generate(&self, algorithm: Algorithm) -> Result<Arc<dyn Signer>, CryptoError> {
        match self {
            MockKeyGenerator::Static => Ok(Arc::new(StaticSigner {
                algorithm,
                signature: b"static-signature".to_vec(),
            })),
            MockKeyGenerator::FailingSigner => Ok(Arc::new(FailingSigner::new(algorithm))),
            MockKeyGenerator::Slow(delay) => Ok(Arc::new(SlowSigner::new(algorithm, *delay))),
            MockKeyGenerator::FailingGeneration => Err(CryptoError::KeyGeneration {
                algorithm: algorithm.as_str(),
                reason: "entropy source unavailable".into(),
            }),
        }
    }
}

/// In-memory storage whose writes and listing can be made to fail.
#[derive(Default)]
pub struct FailingStorage {
    inner: InMemoryDeviceStorage,
    fail_save: AtomicBool,
    fail_update: AtomicBool,
    fail_list: AtomicBool,
    updates: AtomicUsize,
}

impl FailingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_save.store(fail, Ordering::SeqCst);
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn fail_lists(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Number of update calls that reached the store.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl DeviceStorage for FailingStorage {
    fn save(&self, device: Device) -> Result<(), StorageError> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("save rejected".into()));
        }
        self.inner.save(device)
    }

    fn update(&self, device: Device) -> Result<(), StorageError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("update rejected".into()));
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(device)
    }

    fn get(&self, id: &str) -> Result<Device, StorageError> {
        self.inner.get(id)
    }

    fn list_all(&self) -> Result<Vec<Device>, StorageError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("list rejected".into()));
        }
        self.inner.list_all()
    }
}

/// Counter embedded in a signed payload (`"{counter}_..."`).
pub fn payload_counter(signed_data: &str) -> Option<u64> {
    signed_data.split('_').next()?.parse().ok()
}
