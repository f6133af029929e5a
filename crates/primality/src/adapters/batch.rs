//! Batch adapter for classifying many values.
//!
//! ## Purpose
//!
//! This module classifies a complete slice of values in one call and returns
//! a [`PrimalityResult`] with one flag per value and the prime count.
//!
//! ## Design notes
//!
//! * **Processing**: Validates, then delegates the walk to the executor.
//! * **Extension**: A custom classify pass (e.g. parallel) replaces the
//!   sequential walk without changing the result.
//!
//! ## Invariants
//!
//! * At least one value is required.
//! * Output order matches input order.

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
// Batch Builder
// ============================================================================

/// Builder for batch classification.
#[derive(Debug, Clone, Copy)]
pub struct BatchPrimalityBuilder<T> {
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

impl<T> Default for BatchPrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BatchPrimalityBuilder<T> {
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

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

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

    /// Build the batch classifier.
    pub fn build(self) -> Result<BatchPrimality<T>, PrimalityError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchPrimality {
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
// Batch Classifier
// ============================================================================

/// Batch primality classifier.
#[derive(Debug, Clone, Copy)]
pub struct BatchPrimality<T> {
    config: PrimalityConfig<T>,
}

impl<T: Candidate> BatchPrimality<T> {
    /// Classify every value of `values`.
    pub fn classify(&self, values: &[T]) -> Result<PrimalityResult<T>, PrimalityError> {
        Validator::validate_inputs(values)?;

        let parallel = self.config.uses_custom_passes();
        debug!(
            strategy = self.config.scan.strategy.name(),
            values = values.len(),
            parallel,
            "classifying batch"
        );

        let flags = PrimalityExecutor::classify(values, &self.config);

        Ok(PrimalityResult::new(
            values.to_vec(),
            flags,
            self.config.scan.strategy,
            self.config.scan.scan_mode,
            parallel,
        ))
    }

    /// The resolved configuration.
    pub fn config(&self) -> &PrimalityConfig<T> {
        &self.config
    }
}

