//! Single-value adapter.
//!
//! ## Purpose
//!
//! This module provides the `is_prime(n) -> bool` surface: a configured
//! strategy and scan form, reusable for any number of calls.
//!
//! ## Invariants
//!
//! * Calls are independent; a test holds no mutable state.
//! * Every strategy and scan form gives the same answer for the same input.

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::scan::ScanMode;
use crate::algorithms::trial::Strategy;
use crate::engine::executor::{PrimalityExecutor, ScanConfig, ScanPassFn};
use crate::engine::validator::Validator;
use crate::primitives::candidate::Candidate;
use crate::primitives::errors::PrimalityError;

// ============================================================================
// Single Builder
// ============================================================================

/// Builder for a single-value primality test.
#[derive(Debug, Clone, Copy)]
pub struct SinglePrimalityBuilder<T> {
    /// Trial-division strategy
    pub strategy: Strategy,

    /// Sequential scan form
    pub scan_mode: ScanMode,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom scan pass function.
    #[doc(hidden)]
    pub custom_scan_pass: Option<ScanPassFn>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<fn(T)>,
}

impl<T> Default for SinglePrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglePrimalityBuilder<T> {
    fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            scan_mode: ScanMode::default(),
            custom_scan_pass: None,
            parallel: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the trial-division strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the sequential scan form.
    pub fn scan_mode(mut self, mode: ScanMode) -> Self {
        self.scan_mode = mode;
        self
    }

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom scan pass function.
    #[doc(hidden)]
    pub fn custom_scan_pass(mut self, pass: ScanPassFn) -> Self {
        self.custom_scan_pass = Some(pass);
        self
    }

    /// Build the test.
    pub fn build(self) -> Result<PrimalityTest<T>, PrimalityError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(PrimalityTest {
            config: ScanConfig {
                strategy: self.strategy,
                scan_mode: self.scan_mode,
                custom_scan_pass: self.custom_scan_pass,
            },
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Single Test
// ============================================================================

/// A configured primality test.
#[derive(Debug, Clone, Copy)]
pub struct PrimalityTest<T> {
    config: ScanConfig,
    _marker: PhantomData<fn(T)>,
}

impl<T: Candidate> PrimalityTest<T> {
    /// Whether `n` is prime. Values below 2 are never prime.
    #[inline]
    pub fn is_prime(&self, n: T) -> bool {
        PrimalityExecutor::test(n, &self.config)
    }

    /// The resolved configuration.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}
