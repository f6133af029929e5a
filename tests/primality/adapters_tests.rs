#![cfg(feature = "dev")]
//! Tests for the execution adapters.
//!
//! ## Test Organization
//!
//! 1. **Single** - Reusable single-value tests
//! 2. **Batch** - Slice classification
//! 3. **Range** - Inclusive range classification

use primality::internals::adapters::batch::BatchPrimalityBuilder;
use primality::internals::adapters::range::RangePrimalityBuilder;
use primality::internals::adapters::single::SinglePrimalityBuilder;
use primality::internals::algorithms::scan::ScanMode;
use primality::internals::algorithms::trial::{DivisorRange, Strategy};
use primality::internals::engine::executor::ScanConfig;
use primality::internals::primitives::errors::PrimalityError;

fn always_coprime(_: u64, _: DivisorRange) -> bool {
    true
}

fn all_prime<T>(values: &[T], _: &ScanConfig) -> Vec<bool> {
    vec![true; values.len()]
}

// ============================================================================
// Single Adapter Tests
// ============================================================================

/// Test defaults of the single-value builder.
#[test]
fn test_single_defaults() {
    let test = SinglePrimalityBuilder::<u32>::default().build().unwrap();
    assert_eq!(test.config().strategy, Strategy::SixKFilter);
    assert_eq!(test.config().scan_mode, ScanMode::Loop);
    assert!(test.is_prime(97));
    assert!(!test.is_prime(1));
}

/// Test every configuration on the reference values.
#[test]
fn test_single_all_configurations() {
    for strategy in Strategy::ALL {
        for mode in ScanMode::ALL {
            let test = SinglePrimalityBuilder::<i32>::default()
                .strategy(strategy)
                .scan_mode(mode)
                .build()
                .unwrap();
            assert!(!test.is_prime(-3));
            assert!(!test.is_prime(0));
            assert!(!test.is_prime(1));
            assert!(test.is_prime(2));
            assert!(test.is_prime(3));
            assert!(!test.is_prime(4));
            assert!(test.is_prime(5));
            assert!(test.is_prime(7919));
        }
    }
}

/// Test that the parallel hint alone does not change execution.
#[test]
fn test_single_parallel_hint_ignored() {
    let test = SinglePrimalityBuilder::<u64>::default()
        .parallel(true)
        .build()
        .unwrap();
    assert!(test.config().custom_scan_pass.is_none());
    assert!(!test.is_prime(91));
}

/// Test that an injected scan pass is carried into the test.
#[test]
fn test_single_custom_scan_pass() {
    let test = SinglePrimalityBuilder::<u64>::default()
        .strategy(Strategy::SqrtBound)
        .custom_scan_pass(always_coprime)
        .build()
        .unwrap();
    assert!(test.is_prime(91));
}

// ============================================================================
// Batch Adapter Tests
// ============================================================================

/// Test batch classification of 1..=100.
#[test]
fn test_batch_classify() {
    let values: Vec<u32> = (1..=100).collect();
    let batch = BatchPrimalityBuilder::<u32>::default()
        .strategy(Strategy::FullRange)
        .scan_mode(ScanMode::Lazy)
        .build()
        .unwrap();
    let result = batch.classify(&values).unwrap();

    assert_eq!(result.len(), 100);
    assert_eq!(result.prime_count, 25);
    assert_eq!(result.strategy, Strategy::FullRange);
    assert_eq!(result.scan_mode, ScanMode::Lazy);
    assert!(!result.parallel);
    assert_eq!(result.values, values);
}

/// Test that empty batches are rejected.
#[test]
fn test_batch_empty_input() {
    let batch = BatchPrimalityBuilder::<u32>::default().build().unwrap();
    assert_eq!(batch.classify(&[]), Err(PrimalityError::EmptyInput));
}

/// Test that an injected classify pass is used and reported.
#[test]
fn test_batch_custom_classify_pass() {
    let batch = BatchPrimalityBuilder::<u32>::default()
        .custom_classify_pass(all_prime::<u32>)
        .build()
        .unwrap();
    assert!(batch.config().uses_custom_passes());

    let result = batch.classify(&[4, 6, 8]).unwrap();
    assert!(result.parallel);
    assert_eq!(result.prime_count, 3);
}

/// Test mixed-sign batches.
#[test]
fn test_batch_signed_values() {
    let batch = BatchPrimalityBuilder::<i64>::default().build().unwrap();
    let result = batch.classify(&[-7, -2, 0, 2, 7, i64::MAX]).unwrap();
    assert_eq!(result.flags, vec![false, false, false, true, true, false]);
}

// ============================================================================
// Range Adapter Tests
// ============================================================================

/// Test range classification over [1, 100].
#[test]
fn test_range_classify() {
    for strategy in Strategy::ALL {
        let range = RangePrimalityBuilder::<u32>::default()
            .strategy(strategy)
            .build()
            .unwrap();
        let result = range.classify(1, 100).unwrap();
        assert_eq!(result.len(), 100);
        assert_eq!(result.prime_count, 25);
        assert_eq!(result.values.first(), Some(&1));
        assert_eq!(result.values.last(), Some(&100));
    }
}

/// Test single-value and reversed ranges.
#[test]
fn test_range_bounds() {
    let range = RangePrimalityBuilder::<u32>::default().build().unwrap();
    assert_eq!(range.count(7, 7), Ok(1));
    assert_eq!(range.count(8, 8), Ok(0));
    assert_eq!(
        range.classify(10, 1),
        Err(PrimalityError::InvalidRange { start: 10, end: 1 })
    );
}

/// Test ranges crossing zero and reaching the top of the type.
#[test]
fn test_range_edges() {
    let signed = RangePrimalityBuilder::<i16>::default().build().unwrap();
    assert_eq!(signed.count(-100, 100), Ok(25));

    let narrow = RangePrimalityBuilder::<u8>::default().build().unwrap();
    let result = narrow.classify(250, u8::MAX).unwrap();
    assert_eq!(result.values, vec![250, 251, 252, 253, 254, 255]);
    assert_eq!(result.primes().collect::<Vec<_>>(), vec![251]);

    let full = narrow.classify(0, u8::MAX).unwrap();
    assert_eq!(full.len(), 256);
    assert_eq!(full.prime_count, 54);
}

/// Test the reference benchmark range.
#[test]
fn test_range_reference_count() {
    let range = RangePrimalityBuilder::<u32>::default()
        .strategy(Strategy::SqrtBound)
        .build()
        .unwrap();
    assert_eq!(range.count(10_000, 20_000), Ok(1033));
}
