//! # Signature Chain
//!
//! Construction of the chained payload.
//!
//! ```text
//! "{counter}_{data}_{last_signature}"
//! ```
//!
//! Fields are joined verbatim with a single underscore. The payload is only
//! ever hashed and signed, never parsed back, so an underscore inside `data`
//! does not need escaping.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Field separator inside the signed payload.
pub const SEPARATOR: char = '_';

/// The "previous signature" of a device that has never signed.
///
/// Depends only on the immutable device id, so chains of different devices
/// never share an anchor.
pub fn genesis_signature(device_id: &str) -> String {
    STANDARD.encode(device_id.as_bytes())
}

/// Encode raw signature bytes the way they are stored and returned.
pub fn encode_signature(signature: &[u8]) -> String {
    STANDARD.encode(signature)
}

/// Build the payload covered by the signature issued under `counter`.
pub fn build_signed_payload(counter: u64, data: &str, last_signature: &str) -> String {
    format!("{counter}{SEPARATOR}{data}{SEPARATOR}{last_signature}")
}
