//! Modulus versus bitwise-mask reduction by a power of two.
//!
//! The `state` variants read their operands through `black_box` so the
//! reduction cannot be folded; the `local` variants use constants and show
//! what the optimizer does with them.

use criterion::{Criterion, criterion_group, criterion_main};
use primality::internals::math::modular::{mask_for, rem_mask, rem_mod};
use std::hint::black_box;

struct BenchmarkState {
    x: u64,
    modulus: u64,
}

impl Default for BenchmarkState {
    fn default() -> Self {
        Self {
            x: 1_234_567,
            modulus: 1024,
        }
    }
}

fn bench_reduction(c: &mut Criterion) {
    let state = BenchmarkState::default();
    let mut group = c.benchmark_group("reduction");

    group.bench_function("modulus_state", |b| {
        b.iter(|| rem_mod(black_box(state.x), black_box(state.modulus)))
    });

    group.bench_function("bitwise_state", |b| {
        b.iter(|| {
            let mask = state.modulus - 1;
            rem_mask(black_box(state.x), black_box(mask))
        })
    });

    group.bench_function("bitwise_state_checked", |b| {
        b.iter(|| {
            let mask = mask_for(black_box(state.modulus)).unwrap();
            rem_mask(black_box(state.x), mask)
        })
    });

    group.bench_function("modulus_local", |b| {
        b.iter(|| {
            let x = 1_234_567u64;
            let modulus = 1024u64;
            rem_mod(x, modulus)
        })
    });

    group.bench_function("bitwise_local", |b| {
        b.iter(|| {
            let x = 1_234_567u64;
            let mask = 1023u64;
            rem_mask(x, mask)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_reduction);
criterion_main!(benches);
