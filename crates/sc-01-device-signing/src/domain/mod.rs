//! # Domain Layer
//!
//! Devices, chain payload construction and algorithm-specific signers.
//! This is the inner layer of the hexagonal architecture.

pub mod chain;
pub mod crypto;
pub mod entities;
pub mod errors;
