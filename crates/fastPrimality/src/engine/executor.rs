//! Parallel execution passes for primality testing.
//!
//! ## Purpose
//!
//! This module provides the data-parallel passes that are injected into the
//! `primality` crate's execution engine:
//!
//! * a **scan pass** that partitions one divisor range across the rayon pool,
//! * a **classify pass** that distributes the values of a batch across it.
//!
//! ## Design notes
//!
//! * **Short-circuit**: `all` stops handing out work once any worker finds a
//!   divisor, matching the early exit of the sequential scans.
//! * **No shared state**: workers only read `n`; nothing is locked.
//! * **Overhead**: each call re-dispatches work to the pool, so for small
//!   ranges the parallel scan is slower than the sequential one.
//!
//! ## Invariants
//!
//! * Both passes return exactly what the sequential passes return.
//!
//! ## Non-goals
//!
//! * This module does not decide primality (handled by `Strategy`).
//! * This module does not own or size the thread pool.

// External dependencies
use rayon::prelude::*;

// Export dependencies from primality crate
use primality::internals::algorithms::trial::{DivisorRange, Strategy};
use primality::internals::engine::executor::ScanConfig;
use primality::internals::math::divisor::divides;
use primality::internals::primitives::candidate::Candidate;

// ============================================================================
// Parallel Passes
// ============================================================================

/// Check that no value in `range` divides `n`, in parallel.
pub fn scan_pass_parallel(n: u64, range: DivisorRange) -> bool {
    range.iter().into_par_iter().all(|d| !divides(n, d))
}

/// Classify every value of a batch in parallel.
///
/// Each value is tested with the sequential scan of `config`; the parallelism
/// is across values, not within one value's divisor range.
pub fn classify_pass_parallel<T: Candidate>(values: &[T], config: &ScanConfig) -> Vec<bool> {
    values.par_iter().map(|&n| config.test(n)).collect()
}

// ============================================================================
// Convenience
// ============================================================================

/// Test `n` with `strategy`, scanning its divisor range in parallel.
pub fn is_prime_parallel<T: Candidate>(strategy: Strategy, n: T) -> bool {
    let config = ScanConfig {
        strategy,
        custom_scan_pass: Some(scan_pass_parallel),
        ..ScanConfig::default()
    };
    config.test(n)
}
