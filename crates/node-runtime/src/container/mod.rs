//! # Subsystem Container
//!
//! Holds the signing service and the gateway in front of it.
//!
//! ```text
//! SigningGatewayService ──▶ DeviceSigningService ──▶ InMemoryDeviceStorage
//!                                   │
//!                                   └──▶ SoftwareKeyGenerator
//! ```

pub mod config;

pub use config::{ConfigError, NodeConfig};

use anyhow::{Context, Result};
use sc_01_device_signing::{DeviceSigningService, InMemoryDeviceStorage, SoftwareKeyGenerator};
use sc_02_api_gateway::SigningGatewayService;
use std::sync::Arc;
use tracing::info;

/// Concrete signing service: volatile storage, software keys.
pub type ConcreteSigningService = DeviceSigningService<InMemoryDeviceStorage, SoftwareKeyGenerator>;

/// Central container holding all subsystem instances.
pub struct SubsystemContainer {
    /// Node configuration.
    pub config: NodeConfig,
    /// The signing core.
    pub signing: Arc<ConcreteSigningService>,
    /// REST gateway bound to `signing`.
    pub gateway: SigningGatewayService,
}

impl SubsystemContainer {
    /// Validate `config` and wire the subsystems.
    pub fn new(config: NodeConfig) -> Result<Self> {
        config.validate().context("invalid configuration")?;

        let signing = Arc::new(DeviceSigningService::new(
            InMemoryDeviceStorage::new(),
            SoftwareKeyGenerator::new(config.keygen.clone()),
        ));
        info!(
            rsa_key_bits = config.keygen.rsa_key_bits,
            "[sc-01] Device signing initialized"
        );

        let gateway = SigningGatewayService::new(config.gateway.clone(), signing.clone())
            .context("failed to build API gateway")?;
        info!(addr = %config.gateway.http_addr(), "[sc-02] API gateway initialized");

        Ok(Self {
            config,
            signing,
            gateway,
        })
    }
}
