//! # Signers
//!
//! Algorithm-specific signing capabilities. Each signer owns its private key;
//! the rest of the subsystem only sees the `Signer` trait.
//!
//! ## Security Notes
//!
//! - Private keys are never serialized or printed (`Debug` is redacted)
//! - Both `RsaPrivateKey` and `SigningKey` zeroize their secrets on drop
//! - ECDSA signatures draw fresh randomness per call, so signing the same
//!   payload twice yields different signatures

use super::entities::Algorithm;
use super::errors::CryptoError;
use k256::ecdsa::signature::hazmat::RandomizedPrehashSigner;
use k256::ecdsa::{Signature as EcdsaSignature, SigningKey};
use rand::rngs::OsRng;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};
use std::fmt;

/// Signing capability bound to one device's private key.
///
/// Implementations must be thread-safe (`Send + Sync`); a device's signer is
/// shared between the copies handed out by storage.
pub trait Signer: Send + Sync {
    /// Algorithm this signer implements.
    fn algorithm(&self) -> Algorithm;

    /// Sign `payload`, returning the raw signature bytes.
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// DER (SubjectPublicKeyInfo) encoding of the public key.
    fn public_key_der(&self) -> &[u8];
}

// =============================================================================
// RSA
// =============================================================================

/// RSA signer: SHA-256 digest, PKCS#1 v1.5 signature.
pub struct RsaSigner {
    private_key: RsaPrivateKey,
    public_key_der: Vec<u8>,
}

impl RsaSigner {
    /// Generate a fresh key pair with a `bits`-bit modulus.
    pub fn generate(bits: usize) -> Result<Self, CryptoError> {
        let private_key =
            RsaPrivateKey::new(&mut OsRng, bits).map_err(|e| key_generation(Algorithm::Rsa, e))?;
        Self::from_private_key(private_key)
    }

    /// Wrap an existing private key.
    pub fn from_private_key(private_key: RsaPrivateKey) -> Result<Self, CryptoError> {
        use rsa::pkcs8::EncodePublicKey as _;

        let public_key_der = RsaPublicKey::from(&private_key)
            .to_public_key_der()
            .map_err(|e| key_generation(Algorithm::Rsa, e))?
            .as_bytes()
            .to_vec();

        Ok(Self {
            private_key,
            public_key_der,
        })
    }
}

impl Signer for RsaSigner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Rsa
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let digest = Sha256::digest(payload);
        self.private_key
            .sign_with_rng(&mut OsRng, Pkcs1v15Sign::new::<Sha256>(), &digest)
            .map_err(|e| signing(Algorithm::Rsa, e))
    }

    fn public_key_der(&self) -> &[u8] {
        &self.public_key_der
    }
}

impl fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigner").finish_non_exhaustive()
    }
}

// =============================================================================
// ECDSA (secp256k1)
// =============================================================================

/// ECDSA signer: SHA-256 digest, secp256k1, ASN.1 DER encoded signature.
pub struct EcdsaSigner {
    signing_key: SigningKey,
    public_key_der: Vec<u8>,
}

impl EcdsaSigner {
    /// Generate a fresh key pair.
    pub fn generate() -> Result<Self, CryptoError> {
        Self::from_signing_key(SigningKey::random(&mut OsRng))
    }

    /// Wrap an existing signing key.
    pub fn from_signing_key(signing_key: SigningKey) -> Result<Self, CryptoError> {
        use k256::pkcs8::EncodePublicKey as _;

        let public_key_der = signing_key
            .verifying_key()
            .to_public_key_der()
            .map_err(|e| key_generation(Algorithm::Ecc, e))?
            .as_bytes()
            .to_vec();

        Ok(Self {
            signing_key,
            public_key_der,
        })
    }
}

impl Signer for EcdsaSigner {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ecc
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let digest = Sha256::digest(payload);
        let signature: EcdsaSignature = self
            .signing_key
            .sign_prehash_with_rng(&mut OsRng, &digest)
            .map_err(|e| signing(Algorithm::Ecc, e))?;
        Ok(signature.to_der().as_bytes().to_vec())
    }

    fn public_key_der(&self) -> &[u8] {
        &self.public_key_der
    }
}

impl fmt::Debug for EcdsaSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcdsaSigner").finish_non_exhaustive()
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn key_generation(algorithm: Algorithm, err: impl fmt::Display) -> CryptoError {
    CryptoError::KeyGeneration {
        algorithm: algorithm.as_str(),
        reason: err.to_string(),
    }
}

fn signing(algorithm: Algorithm, err: impl fmt::Display) -> CryptoError {
    CryptoError::Signing {
        algorithm: algorithm.as_str(),
        reason: err.to_string(),
    }
}
