//! # Node Configuration
//!
//! Unified configuration for the gateway, key generation and logging.
//!
//! Every value has a default; environment variables override them. Values
//! that are present but unparseable are errors rather than silently ignored.

use sc_01_device_signing::{KeyGenConfig, KeyGenConfigError};
use sc_02_api_gateway::{ConfigError as GatewayConfigError, GatewayConfig};
use signing_telemetry::TelemetryConfig;
use std::str::FromStr;
use std::time::Duration;

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// REST gateway configuration.
    pub gateway: GatewayConfig,
    /// Key generation configuration.
    pub keygen: KeyGenConfig,
    /// Logging configuration.
    pub telemetry: TelemetryConfig,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("{var}={value:?} is not a valid {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Gateway(#[from] GatewayConfigError),

    #[error(transparent)]
    KeyGen(#[from] KeyGenConfigError),
}

impl NodeConfig {
    /// Load configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `SC_LISTEN_HOST` | `0.0.0.0` |
    /// | `SC_LISTEN_PORT` | `8080` |
    /// | `SC_RSA_KEY_BITS` | `2048` |
    /// | `SC_MAX_BODY_BYTES` | `1048576` |
    /// | `SC_REQUEST_TIMEOUT_MS` | `30000` |
    ///
    /// Logging variables are described in `signing_telemetry`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(host) = parse_var(&lookup, "SC_LISTEN_HOST", "IP address")? {
            config.gateway.host = host;
        }
        if let Some(port) = parse_var(&lookup, "SC_LISTEN_PORT", "port")? {
            config.gateway.port = port;
        }
        if let Some(bytes) = parse_var(&lookup, "SC_MAX_BODY_BYTES", "byte count")? {
            config.gateway.max_body_bytes = bytes;
        }
        let timeout_ms: Option<u64> =
            parse_var(&lookup, "SC_REQUEST_TIMEOUT_MS", "millisecond count")?;
        if let Some(ms) = timeout_ms {
            config.gateway.request_timeout = Duration::from_millis(ms);
        }
        if let Some(bits) = parse_var(&lookup, "SC_RSA_KEY_BITS", "bit count")? {
            config.keygen.rsa_key_bits = bits;
        }

        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway.validate()?;
        self.keygen.validate()?;
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            var,
            value,
            expected,
        })
}
