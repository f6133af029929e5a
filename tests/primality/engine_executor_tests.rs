#![cfg(feature = "dev")]
//! Tests for the execution engine.
//!
//! ## Test Organization
//!
//! 1. **Scan Configuration** - Per-value dispatch and injected scan passes
//! 2. **Classification** - Batch walk, ordering and injected classify passes

use primality::internals::algorithms::scan::ScanMode;
use primality::internals::algorithms::trial::{DivisorRange, Strategy};
use primality::internals::engine::executor::{
    PrimalityConfig, PrimalityExecutor, ScanConfig, classify_sequential,
};

fn always_coprime(_: u64, _: DivisorRange) -> bool {
    true
}

fn never_called(n: u64, range: DivisorRange) -> bool {
    panic!("unexpected scan of {n} over {range:?}")
}

fn all_false<T>(values: &[T], _: &ScanConfig) -> Vec<bool> {
    vec![false; values.len()]
}

fn config(strategy: Strategy, scan_mode: ScanMode) -> ScanConfig {
    ScanConfig {
        strategy,
        scan_mode,
        custom_scan_pass: None,
    }
}

// ============================================================================
// Scan Configuration Tests
// ============================================================================

/// Test the default configuration.
#[test]
fn test_scan_config_default() {
    let cfg = ScanConfig::default();
    assert_eq!(cfg.strategy, Strategy::SixKFilter);
    assert_eq!(cfg.scan_mode, ScanMode::Loop);
    assert!(cfg.custom_scan_pass.is_none());
    assert!(cfg.test(97u32));
    assert!(!cfg.test(1u32));
}

/// Test that each sequential configuration matches the strategy directly.
#[test]
fn test_scan_config_matches_strategy() {
    for strategy in Strategy::ALL {
        for mode in ScanMode::ALL {
            let cfg = config(strategy, mode);
            for n in 0u64..500 {
                assert_eq!(cfg.test_candidate(n), strategy.is_prime_with(n, mode));
                assert_eq!(PrimalityExecutor::test(n, &cfg), cfg.test_candidate(n));
            }
        }
    }
}

/// Test that an injected scan pass replaces the sequential scan.
///
/// Screening still happens before the injected pass is consulted.
#[test]
fn test_custom_scan_pass_dispatch() {
    let mut cfg = config(Strategy::SqrtBound, ScanMode::Loop);
    cfg.custom_scan_pass = Some(always_coprime);
    assert!(cfg.test(9u32));
    assert!(!cfg.test(1u32));
    assert!(!cfg.test(-9i32));

    cfg.strategy = Strategy::SixKFilter;
    assert!(!cfg.test(9u32));
    assert!(cfg.test(25u32));
}

/// Test that empty ranges and early decisions never reach the scan pass.
#[test]
fn test_custom_scan_pass_skipped_when_decided() {
    let mut cfg = config(Strategy::SqrtBound, ScanMode::Loop);
    cfg.custom_scan_pass = Some(never_called);
    assert!(cfg.test(2u64));
    assert!(cfg.test(3u64));
    assert!(!cfg.test(0u64));

    cfg.strategy = Strategy::SixKFilter;
    assert!(!cfg.test(4u64));
    assert!(!cfg.test(1_000_000u64));
}

/// Test the Debug representation hides function pointers.
#[test]
fn test_scan_config_debug() {
    let mut cfg = ScanConfig::default();
    let text = format!("{cfg:?}");
    assert!(text.contains("SixKFilter"));
    assert!(text.contains("custom_scan_pass: false"));

    cfg.custom_scan_pass = Some(always_coprime);
    assert!(format!("{cfg:?}").contains("custom_scan_pass: true"));
}

// ============================================================================
// Classification Tests
// ============================================================================

/// Test that the sequential walk preserves input order.
#[test]
fn test_classify_sequential_order() {
    let values = [10u32, 7, 1, 2, 15, 13];
    let flags = classify_sequential(&values, &ScanConfig::default());
    assert_eq!(flags, vec![false, true, false, true, false, true]);
}

/// Test executor classification with and without an injected pass.
#[test]
fn test_classify_dispatch() {
    let values: Vec<u32> = (1..=100).collect();
    let mut cfg = PrimalityConfig::<u32> {
        scan: config(Strategy::FullRange, ScanMode::Lazy),
        custom_classify_pass: None,
    };
    assert!(!cfg.uses_custom_passes());

    let flags = PrimalityExecutor::classify(&values, &cfg);
    assert_eq!(flags.len(), 100);
    assert_eq!(flags.iter().filter(|&&p| p).count(), 25);

    cfg.custom_classify_pass = Some(all_false::<u32>);
    assert!(cfg.uses_custom_passes());
    let flags = PrimalityExecutor::classify(&values, &cfg);
    assert!(flags.iter().all(|&p| !p));
}

/// Test that an injected scan pass alone counts as custom execution.
#[test]
fn test_uses_custom_passes_scan_only() {
    let mut scan = ScanConfig::default();
    scan.custom_scan_pass = Some(always_coprime);
    let cfg = PrimalityConfig::<u64> {
        scan,
        custom_classify_pass: None,
    };
    assert!(cfg.uses_custom_passes());
}
