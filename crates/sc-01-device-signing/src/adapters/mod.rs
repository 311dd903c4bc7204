//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports.
//!
//! - `storage`: Device storage backends
//! - `keygen`: Software key generation for RSA and ECDSA

pub mod keygen;
pub mod storage;
