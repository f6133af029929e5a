//! Primality benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Every strategy in loop, lazy and concurrent lazy form over `10000..=20000`
//! - Batch classification through the adapters
//! - Scalability of the default strategy with input magnitude
//!
//! For serial batch execution, use `FASTPRIMALITY_MODE=serial cargo bench`.
//! For parallel batch execution, use `FASTPRIMALITY_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastPrimality::prelude::*;
use rand::prelude::*;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTPRIMALITY_MODE").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

/// The reference input: every integer in `10000..=20000`.
fn reference_values() -> Vec<u32> {
    (10_000..=20_000).collect()
}

/// Random odd values of roughly `digits` decimal digits.
fn generate_random_values(size: usize, digits: u32, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = 10u64.pow(digits - 1);
    let high = 10u64.pow(digits);
    (0..size).map(|_| rng.random_range(low..high) | 1).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_strategies(c: &mut Criterion) {
    let values = reference_values();
    let mut group = c.benchmark_group("strategies");
    group.sample_size(20);
    group.throughput(Throughput::Elements(values.len() as u64));

    for strategy in Strategy::ALL {
        for mode in ScanMode::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), mode.name()),
                &values,
                |b, values| {
                    b.iter(|| {
                        for &n in values {
                            black_box(strategy.is_prime_with(black_box(n), mode));
                        }
                    })
                },
            );
        }

        group.bench_with_input(
            BenchmarkId::new(strategy.name(), "concurrent_lazy"),
            &values,
            |b, values| {
                b.iter(|| {
                    for &n in values {
                        black_box(is_prime_parallel(strategy, black_box(n)));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let values = reference_values();
    let mut group = c.benchmark_group(format!("batch_{}", mode_name));
    group.sample_size(50);
    group.throughput(Throughput::Elements(values.len() as u64));

    for strategy in [SqrtBound, SixKFilter] {
        group.bench_with_input(
            BenchmarkId::new("classify", strategy.name()),
            &values,
            |b, values| {
                b.iter(|| {
                    Primality::new()
                        .strategy(strategy)
                        .adapter(Batch)
                        .parallel(use_parallel)
                        .build()
                        .unwrap()
                        .classify(black_box(values))
                        .unwrap()
                })
            },
        );
    }

    group.bench_function("range_six_k_filter", |b| {
        b.iter(|| {
            Primality::new()
                .adapter(Range)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .count(black_box(10_000u32), black_box(20_000u32))
                .unwrap()
        })
    });
    group.finish();
}

fn bench_magnitude(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnitude");
    group.sample_size(20);

    for digits in [6u32, 9, 12] {
        let values = generate_random_values(1_000, digits, 42);
        group.throughput(Throughput::Elements(values.len() as u64));

        group.bench_with_input(BenchmarkId::new("six_k_filter", digits), &values, |b, values| {
            b.iter(|| {
                for &n in values {
                    black_box(SixKFilter.is_prime(black_box(n)));
                }
            })
        });

        group.bench_with_input(
            BenchmarkId::new("six_k_filter_concurrent", digits),
            &values,
            |b, values| {
                b.iter(|| {
                    for &n in values {
                        black_box(is_prime_parallel(SixKFilter, black_box(n)));
                    }
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_batch, bench_magnitude);
criterion_main!(benches);
