//! # SC-01 Device Signing Benchmarks
//!
//! Every `sign_data` call holds the global sign lock for one signature, so
//! single-call latency bounds overall throughput.
//!
//! Measured:
//! - payload framing (no crypto)
//! - one chained signature per algorithm
//! - contended signing from several threads on one device

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use sc_01_device_signing::test_helpers::fast_key_generator;
use sc_01_device_signing::{
    build_signed_payload, CreateDeviceRequest, DeviceSigningApi, DeviceSigningService,
    InMemoryDeviceStorage,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

type BenchService = DeviceSigningService<InMemoryDeviceStorage>;

fn service_with_device(algorithm: &str) -> Option<BenchService> {
    let service = DeviceSigningService::new(InMemoryDeviceStorage::new(), fast_key_generator());
    service
        .create_device(CreateDeviceRequest::new("bench", "bench device", algorithm))
        .ok()?;
    Some(service)
}

pub fn payload_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("sc-01/payload");
    let tail = "a".repeat(344); // base64 of a 2048-bit RSA signature

    for size in [16usize, 256, 4096] {
        let data = "x".repeat(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| build_signed_payload(black_box(41), black_box(data), black_box(&tail)))
        });
    }

    group.finish();
}

pub fn chained_signing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sc-01/sign_data");
    group.measurement_time(Duration::from_secs(10));

    for algorithm in ["ECC", "RSA"] {
        let Some(service) = service_with_device(algorithm) else {
            continue;
        };
        group.bench_function(algorithm, |b| {
            b.iter(|| service.sign_data(black_box("bench"), black_box("tx")))
        });
    }

    group.finish();
}

pub fn contended_signing(c: &mut Criterion) {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 25;

    let mut group = c.benchmark_group("sc-01/contended");
    group.sample_size(10);
    group.throughput(Throughput::Elements((THREADS * PER_THREAD) as u64));

    let Some(service) = service_with_device("ECC").map(Arc::new) else {
        return;
    };

    group.bench_function("ecc_4x25", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let service = Arc::clone(&service);
                    thread::spawn(move || {
                        for _ in 0..PER_THREAD {
                            let _ = service.sign_data("bench", "tx");
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        })
    });

    group.finish();
}
