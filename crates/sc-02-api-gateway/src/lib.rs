//! SC-02 API Gateway - REST interface for the device signing subsystem.
//!
//! Translates HTTP requests into `DeviceSigningApi` calls and service errors
//! into status codes. Holds no signing state of its own.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     API GATEWAY (sc-02)                      │
//! ├──────────────────────────────────────────────────────────────┤
//! │   HTTP  /api/v0/...                                          │
//! │          │                                                   │
//! │   ┌──────┴──────────────────────────────────────┐            │
//! │   │            Middleware Stack                  │            │
//! │   │   Span → Envelope → BodyLimit → Timeout      │            │
//! │   └──────┬──────────────────────────────────────┘            │
//! │          │                                                   │
//! │   ┌──────┴──────────────────────────────────────┐            │
//! │   │   REST handlers (spawn_blocking bridge)      │            │
//! │   └──────┬──────────────────────────────────────┘            │
//! └──────────┼───────────────────────────────────────────────────┘
//!            ▼
//!   sc-01-device-signing (DeviceSigningApi)
//! ```
//!
//! # Routes
//!
//! | Method | Path                        | Success |
//! |--------|-----------------------------|---------|
//! | GET    | `/api/v0/health`            | 200     |
//! | POST   | `/api/v0/devices`           | 201     |
//! | GET    | `/api/v0/devices`           | 200     |
//! | GET    | `/api/v0/devices/{id}`      | 200     |
//! | POST   | `/api/v0/devices/{id}/sign` | 200     |
//!
//! Success bodies are wrapped as `{"data": ...}`, failures as
//! `{"errors": ["..."]}`, including routing and body limit rejections.
//!
//! # Usage
//!
//! ```ignore
//! use sc_02_api_gateway::{GatewayConfig, SigningGatewayService};
//!
//! let gateway = SigningGatewayService::new(GatewayConfig::default(), api)?;
//! gateway.start(shutdown_signal()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod middleware;
pub mod rest;
pub mod router;
pub mod service;

// Re-exports for public API
pub use domain::config::{ConfigError, GatewayConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use domain::types::*;
pub use router::{build_router, AppState};
pub use service::SigningGatewayService;

/// REST API version segment.
pub const API_VERSION: &str = "v0";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
