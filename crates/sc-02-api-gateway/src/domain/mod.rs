//! Domain layer for the API Gateway.
//!
//! Configuration, wire types and error envelopes. No I/O.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigError, GatewayConfig};
pub use error::{ApiError, ApiResult, GatewayError};
pub use types::*;
