//! Range adapter for classifying consecutive values.
//!
//! ## Purpose
//!
//! This module classifies every value of an inclusive range `start..=end`,
//! the shape of input the benchmarks drive (`10000..=20000`), and counts the
//! primes in it.
//!
//! ## Invariants
//!
//! * `start <= end`; a reversed range is an error, a one-value range is not.
//! * Values appear in the result in increasing order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use tracing::debug;

// Internal dependencies
use crate::algorithms::scan::ScanMode;
use crate::algorithms::trial::Strategy;
use crate::engine::executor::{ClassifyPassFn, PrimalityConfig, PrimalityExecutor};
use crate::engine::executor::{ScanConfig, ScanPassFn};
use crate::engine::output::PrimalityResult;
use crate::engine::validator::Validator;
use crate::primitives::candidate::Candidate;
use crate::primitives::errors::PrimalityError;

// ============================================================================
// Range Builder
// ============================================================================

/// Builder for range classification.
#[derive(Debug, Clone, Copy)]
pub struct RangePrimalityBuilder<T> {
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

    /// Custom classification pass function.
    #[doc(hidden)]
    pub custom_classify_pass: Option<ClassifyPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T> Default for RangePrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RangePrimalityBuilder<T> {
    fn new() -> Self {
        Self {
            strategy: Strategy::default(),
            scan_mode: ScanMode::default(),
            custom_scan_pass: None,
            custom_classify_pass: None,
            parallel: None,
            duplicate_param: None,
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

    /// Set a custom classification pass function.
    #[doc(hidden)]
    pub fn custom_classify_pass(mut self, pass: ClassifyPassFn<T>) -> Self {
        self.custom_classify_pass = Some(pass);
        self
    }

    /// Build the range classifier.
    pub fn build(self) -> Result<RangePrimality<T>, PrimalityError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(RangePrimality {
            config: PrimalityConfig {
                scan: ScanConfig {
                    strategy: self.strategy,
                    scan_mode: self.scan_mode,
                    custom_scan_pass: self.custom_scan_pass,
                },
                custom_classify_pass: self.custom_classify_pass,
            },
        })
    }
}

// ============================================================================
// Range Classifier
// ============================================================================

/// Inclusive-range primality classifier.
#[derive(Debug, Clone, Copy)]
pub struct RangePrimality<T> {
    config: PrimalityConfig<T>,
}

impl<T: Candidate> RangePrimality<T> {
    /// Classify every value in `start..=end`.
    pub fn classify(&self, start: T, end: T) -> Result<PrimalityResult<T>, PrimalityError> {
        Validator::validate_range(start, end)?;

        let values = inclusive_values(start, end);
        let parallel = self.config.uses_custom_passes();
        debug!(
            strategy = self.config.scan.strategy.name(),
            values = values.len(),
            parallel,
            "classifying range"
        );

        let flags = PrimalityExecutor::classify(&values, &self.config);

        Ok(PrimalityResult::new(
            values,
            flags,
            self.config.scan.strategy,
            self.config.scan.scan_mode,
            parallel,
        ))
    }

    /// Number of primes in `start..=end`.
    pub fn count(&self, start: T, end: T) -> Result<usize, PrimalityError> {
        self.classify(start, end).map(|result| result.prime_count)
    }

    /// The resolved configuration.
    pub fn config(&self) -> &PrimalityConfig<T> {
        &self.config
    }
}

/// Materialize `start..=end`. Requires `start <= end`.
fn inclusive_values<T: Candidate>(start: T, end: T) -> Vec<T> {
    let span = end
        .to_i128()
        .zip(start.to_i128())
        .and_then(|(e, s)| usize::try_from(e - s + 1).ok())
        .unwrap_or(0);

    let mut values = Vec::with_capacity(span);
    let mut value = start;
    loop {
        values.push(value);
        if value == end {
            break;
        }
        value = value + T::one();
    }
    values
}
