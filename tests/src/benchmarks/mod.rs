//! # Signing Service Benchmarks
//!
//! Criterion bodies shared by `benches/signing_benchmarks.rs`.

pub mod sc_01_signing;
