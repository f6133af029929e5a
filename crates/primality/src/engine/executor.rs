//! Execution engine for primality tests.
//!
//! ## Purpose
//!
//! This module turns a strategy and a scan form into something that can be
//! run on one value or a batch of values. Extension crates plug alternative
//! execution in through two hooks: a scan pass (how one divisor range is
//! searched) and a classify pass (how a batch is distributed).
//!
//! ## Design notes
//!
//! * The strategy alone decides primality; hooks only change how the
//!   divisor range or the batch is walked, never the outcome.
//! * Hooks are plain function pointers so configurations stay `Copy`-cheap
//!   and `no_std` friendly.
//! * Without hooks, execution is sequential.
//!
//! ## Invariants
//!
//! * A scan pass returns `true` iff no value in the range divides the input.
//! * A classify pass returns one flag per input value, in input order.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not provide parallel execution itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Formatter, Result};

// Internal dependencies
use crate::algorithms::scan::ScanMode;
use crate::algorithms::trial::{DivisorRange, Strategy};
use crate::primitives::candidate::Candidate;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for custom scan pass function
#[doc(hidden)]
pub type ScanPassFn = fn(
    u64,          // n
    DivisorRange, // non-empty candidate divisors
) -> bool; // true iff no divisor found

/// Signature for custom classification pass function
#[doc(hidden)]
pub type ClassifyPassFn<T> = fn(
    &[T],        // values
    &ScanConfig, // per-value configuration
) -> Vec<bool>; // one flag per value

// ============================================================================
// Configuration
// ============================================================================

/// Everything needed to test a single value.
#[derive(Clone, Copy, Default)]
pub struct ScanConfig {
    /// Trial-division strategy.
    pub strategy: Strategy,

    /// Sequential scan form, used when no custom scan pass is set.
    pub scan_mode: ScanMode,

    /// Custom scan pass replacing the sequential scan.
    #[doc(hidden)]
    pub custom_scan_pass: Option<ScanPassFn>,
}

impl Debug for ScanConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("ScanConfig")
            .field("strategy", &self.strategy)
            .field("scan_mode", &self.scan_mode)
            .field("custom_scan_pass", &self.custom_scan_pass.is_some())
            .finish()
    }
}

impl ScanConfig {
    /// Test one value in the widened domain.
    #[inline]
    pub fn test_candidate(&self, n: u64) -> bool {
        match self.custom_scan_pass {
            Some(pass) => self.strategy.decide(n, pass),
            None => self
                .strategy
                .decide(n, |n, range| self.scan_mode.run(n, range)),
        }
    }

    /// Test one value.
    #[inline]
    pub fn test<T: Candidate>(&self, n: T) -> bool {
        n.to_candidate().is_some_and(|n| self.test_candidate(n))
    }
}

/// Configuration for batch execution.
#[derive(Clone, Copy)]
pub struct PrimalityConfig<T> {
    /// Per-value configuration.
    pub scan: ScanConfig,

    /// Custom classification pass replacing the sequential batch walk.
    #[doc(hidden)]
    pub custom_classify_pass: Option<ClassifyPassFn<T>>,
}

impl<T> Debug for PrimalityConfig<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("PrimalityConfig")
            .field("scan", &self.scan)
            .field("custom_classify_pass", &self.custom_classify_pass.is_some())
            .finish()
    }
}

impl<T> PrimalityConfig<T> {
    /// Whether any part of the execution was handed to an injected pass.
    pub fn uses_custom_passes(&self) -> bool {
        self.scan.custom_scan_pass.is_some() || self.custom_classify_pass.is_some()
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs primality tests according to a configuration.
pub struct PrimalityExecutor;

impl PrimalityExecutor {
    /// Test a single value.
    #[inline]
    pub fn test<T: Candidate>(n: T, config: &ScanConfig) -> bool {
        config.test(n)
    }

    /// Classify every value of a batch, preserving input order.
    pub fn classify<T: Candidate>(values: &[T], config: &PrimalityConfig<T>) -> Vec<bool> {
        match config.custom_classify_pass {
            Some(pass) => pass(values, &config.scan),
            None => classify_sequential(values, &config.scan),
        }
    }
}

/// Sequential classification pass.
pub fn classify_sequential<T: Candidate>(values: &[T], config: &ScanConfig) -> Vec<bool> {
    values.iter().map(|&n| config.test(n)).collect()
}
