//! # Signing Service Benchmarks
//!
//! ```bash
//! cargo bench -p sc-tests
//! ```

use criterion::{criterion_group, criterion_main};
use sc_tests::benchmarks::sc_01_signing;

criterion_group!(
    benches,
    sc_01_signing::payload_building,
    sc_01_signing::chained_signing,
    sc_01_signing::contended_signing,
);

criterion_main!(benches);
