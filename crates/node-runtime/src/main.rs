//! # Signing Node
//!
//! Entry point for the signature device service.
//!
//! Storage is volatile: devices and their chains are lost on exit.

use anyhow::{Context, Result};
use node_runtime::{NodeConfig, NodeRuntime};
use signing_telemetry::init_telemetry;
use tracing::{info, warn};

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    info!("Initiating graceful shutdown...");
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env().context("failed to load configuration")?;

    init_telemetry(&config.telemetry).context("failed to initialize logging")?;

    let runtime = NodeRuntime::new(config)?;
    let listener = runtime.bind().await?;

    info!("Node is running. Press Ctrl+C to stop.");
    runtime.run(listener, shutdown_signal()).await
}
