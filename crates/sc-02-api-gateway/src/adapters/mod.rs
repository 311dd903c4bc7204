//! Adapters for the API Gateway.
//!
//! Conversions between the signing subsystem's errors and HTTP errors.

pub mod error_conversions;

pub use error_conversions::{lookup_error, service_error};
