//! # Signing Service Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── audit.rs          # Chain auditor used by the integration tests
//! ├── benchmarks/       # Criterion benchmark bodies
//! │   └── sc_01_signing.rs
//! │
//! └── integration/      # Cross-crate flows
//!     ├── chaining.rs
//!     ├── concurrency.rs
//!     └── gateway_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sc-tests
//!
//! # By category
//! cargo test -p sc-tests integration::
//!
//! # Benchmarks
//! cargo bench -p sc-tests
//! ```

pub mod audit;
pub mod benchmarks;
