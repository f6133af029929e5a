#![cfg(feature = "dev")]
//! Tests for classification results.

use primality::internals::algorithms::scan::ScanMode;
use primality::internals::algorithms::trial::Strategy;
use primality::internals::engine::output::PrimalityResult;

fn sample() -> PrimalityResult<u32> {
    PrimalityResult::new(
        vec![1, 2, 3, 4, 5],
        vec![false, true, true, false, true],
        Strategy::SqrtBound,
        ScanMode::Lazy,
        false,
    )
}

/// Test that counts are derived from the flags.
#[test]
fn test_counts() {
    let result = sample();
    assert_eq!(result.len(), 5);
    assert!(!result.is_empty());
    assert_eq!(result.prime_count, 3);
    assert_eq!(result.non_prime_count(), 2);
    assert_eq!(result.primes().collect::<Vec<_>>(), vec![2, 3, 5]);
}

/// Test an empty result.
#[test]
fn test_empty_result() {
    let result: PrimalityResult<u64> =
        PrimalityResult::new(vec![], vec![], Strategy::FullRange, ScanMode::Loop, false);
    assert!(result.is_empty());
    assert_eq!(result.prime_count, 0);
    assert_eq!(result.non_prime_count(), 0);
    assert_eq!(result.primes().count(), 0);
}

/// Test the summary header.
#[test]
fn test_display_summary() {
    let text = sample().to_string();
    assert!(text.contains("Summary:"));
    assert!(text.contains("Values:    5"));
    assert!(text.contains("Primes:    3"));
    assert!(text.contains("Strategy:  sqrt_bound"));
    assert!(text.contains("Execution: lazy"));
    assert!(text.contains("Value"));
    assert!(!text.contains("..."));
}

/// Test that parallel execution is reported instead of the scan form.
#[test]
fn test_display_parallel() {
    let mut result = sample();
    result.parallel = true;
    let text = result.to_string();
    assert!(text.contains("Execution: parallel"));
    assert!(!text.contains("Execution: lazy"));
}

/// Test that long results are elided in the middle.
#[test]
fn test_display_elides_long_results() {
    let values: Vec<u32> = (100..150).collect();
    let flags = vec![false; values.len()];
    let result = PrimalityResult::new(values, flags, Strategy::SixKFilter, ScanMode::Loop, false);
    let text = result.to_string();

    assert!(text.contains("..."));
    assert!(text.contains("109"));
    assert!(text.contains("140"));
    assert!(!text.contains("125"));
    assert_eq!(text.matches("...").count(), 1);
}
