//! # Chain Auditor
//!
//! Independently checks a device's signature sequence the way an external
//! auditor would: only the public key and the returned records are used.
//!
//! Payloads have the form `"{counter}_{data}_{previous}"`. `data` may itself
//! contain underscores, but `previous` is standard base64, which never does,
//! so the counter is everything before the first `_` and `previous` is
//! everything after the last one.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sc_01_device_signing::{genesis_signature, Algorithm, SignatureRecord};
use sha2::{Digest, Sha256};

/// Why a chain failed the audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    /// `signed_data` is not `counter_data_previous`
    MalformedPayload { index: usize },
    /// Counter is not the record's position
    CounterMismatch { index: usize, found: u64 },
    /// `previous` is not the prior signature (or the genesis value)
    BrokenLink { index: usize },
    /// Signature is not valid base64
    BadEncoding { index: usize },
    /// Signature does not verify under the public key
    BadSignature { index: usize },
    /// Public key DER could not be decoded
    BadPublicKey,
}

/// Split a payload into `(counter, data, previous)`.
pub fn split_payload(signed_data: &str) -> Option<(u64, &str, &str)> {
    let (counter, rest) = signed_data.split_once('_')?;
    let (data, previous) = rest.rsplit_once('_')?;
    Some((counter.parse().ok()?, data, previous))
}

/// Verify one base64 signature over `signed_data`.
pub fn verify_signature(
    algorithm: Algorithm,
    public_key_der: &[u8],
    signed_data: &str,
    signature_b64: &str,
    index: usize,
) -> Result<(), AuditError> {
    let signature = STANDARD
        .decode(signature_b64)
        .map_err(|_| AuditError::BadEncoding { index })?;

    match algorithm {
        Algorithm::Rsa => {
            use rsa::pkcs8::DecodePublicKey;
            use rsa::{Pkcs1v15Sign, RsaPublicKey};

            let key = RsaPublicKey::from_public_key_der(public_key_der)
                .map_err(|_| AuditError::BadPublicKey)?;
            let digest = Sha256::digest(signed_data.as_bytes());
            key.verify(Pkcs1v15Sign::new::<Sha256>(), &digest, &signature)
                .map_err(|_| AuditError::BadSignature { index })
        }
        Algorithm::Ecc => {
            use k256::ecdsa::signature::Verifier;
            use k256::ecdsa::{Signature, VerifyingKey};
            use k256::pkcs8::DecodePublicKey;

            let key = VerifyingKey::from_public_key_der(public_key_der)
                .map_err(|_| AuditError::BadPublicKey)?;
            let signature =
                Signature::from_der(&signature).map_err(|_| AuditError::BadSignature { index })?;
            key.verify(signed_data.as_bytes(), &signature)
                .map_err(|_| AuditError::BadSignature { index })
        }
    }
}

/// Audit a complete sequence of records, oldest first.
pub fn audit_chain(
    device_id: &str,
    algorithm: Algorithm,
    public_key_der: &[u8],
    records: &[SignatureRecord],
) -> Result<(), AuditError> {
    let mut previous = genesis_signature(device_id);

    for (index, record) in records.iter().enumerate() {
        let (counter, _data, linked) = split_payload(&record.signed_data)
            .ok_or(AuditError::MalformedPayload { index })?;

        if counter != index as u64 {
            return Err(AuditError::CounterMismatch {
                index,
                found: counter,
            });
        }
        if linked != previous {
            return Err(AuditError::BrokenLink { index });
        }

        verify_signature(
            algorithm,
            public_key_der,
            &record.signed_data,
            &record.signature,
            index,
        )?;
        previous = record.signature.clone();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_payload_with_underscores_in_data() {
        assert_eq!(
            split_payload("12_a_b_c_ZDE="),
            Some((12, "a_b_c", "ZDE="))
        );
        assert_eq!(split_payload("0__ZDE="), Some((0, "", "ZDE=")));
        assert_eq!(split_payload("x_tx_ZDE="), None);
        assert_eq!(split_payload("nounderscore"), None);
    }
}
