//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the gateway calls
//! - **Outbound (Driven)**: Storage and key generation this subsystem needs

pub mod inbound;
pub mod outbound;
