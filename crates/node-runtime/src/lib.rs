//! # Node Runtime Library
//!
//! Wiring for the `signing-node` binary, exposed for testing.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize logging
//! 3. Validate configuration and build the subsystem container
//! 4. Bind the gateway listener
//! 5. Serve until the shutdown signal, draining in-flight requests

pub mod container;

use anyhow::{Context, Result};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub use container::{ConfigError, NodeConfig, SubsystemContainer};

/// The runtime owning all subsystems.
pub struct NodeRuntime {
    container: SubsystemContainer,
}

impl NodeRuntime {
    /// Create a new runtime with configuration.
    pub fn new(config: NodeConfig) -> Result<Self> {
        info!("Creating signing node runtime");
        Ok(Self {
            container: SubsystemContainer::new(config)?,
        })
    }

    /// Bind the configured gateway address.
    pub async fn bind(&self) -> Result<TcpListener> {
        self.container
            .gateway
            .bind()
            .await
            .context("failed to bind API gateway")
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn run<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: Option<SocketAddr> = listener.local_addr().ok();
        info!("===========================================");
        info!("  Signing Node v{}", env!("CARGO_PKG_VERSION"));
        info!("  Listening on {:?}", addr);
        info!("===========================================");

        self.container
            .gateway
            .serve(listener, shutdown)
            .await
            .context("API gateway failed")?;

        info!("Shutdown complete");
        Ok(())
    }

    /// Get a reference to the subsystem container.
    pub fn container(&self) -> &SubsystemContainer {
        &self.container
    }
}
