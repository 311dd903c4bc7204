//! Software key generation.
//!
//! Keys are generated in process from the operating system RNG. Selecting the
//! algorithm happens exactly once here; the returned signer carries the key
//! for the device's lifetime.

use crate::domain::crypto::{EcdsaSigner, RsaSigner, Signer};
use crate::domain::entities::Algorithm;
use crate::domain::errors::CryptoError;
use crate::ports::outbound::KeyGenerator;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Smallest accepted RSA modulus.
pub const MIN_RSA_KEY_BITS: usize = 1024;
/// Largest accepted RSA modulus.
pub const MAX_RSA_KEY_BITS: usize = 4096;

/// Key generation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// RSA modulus size in bits
    pub rsa_key_bits: usize,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self { rsa_key_bits: 2048 }
    }
}

/// Invalid key generation configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyGenConfigError {
    #[error("RSA key size {0} bits outside supported range {MIN_RSA_KEY_BITS}..={MAX_RSA_KEY_BITS}")]
    RsaKeyBits(usize),
}

impl KeyGenConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), KeyGenConfigError> {
        if !(MIN_RSA_KEY_BITS..=MAX_RSA_KEY_BITS).contains(&self.rsa_key_bits) {
            return Err(KeyGenConfigError::RsaKeyBits(self.rsa_key_bits));
        }
        Ok(())
    }
}

/// Generates RSA and secp256k1 key pairs in software.
#[derive(Debug, Clone, Default)]
pub struct SoftwareKeyGenerator {
    config: KeyGenConfig,
}

impl SoftwareKeyGenerator {
    pub fn new(config: KeyGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }
}

impl KeyGenerator for SoftwareKeyGenerator {
    fn generate(&self, algorithm: Algorithm) -> Result<Arc<dyn Signer>, CryptoError> {
        debug!(%algorithm, rsa_key_bits = self.config.rsa_key_bits, "Generating key pair");
        let signer: Arc<dyn Signer> = match algorithm {
            Algorithm::Rsa => Arc::new(RsaSigner::generate(self.config.rsa_key_bits)?),
            Algorithm::Ecc => Arc::new(EcdsaSigner::generate()?),
        };
        Ok(signer)
    }
}
