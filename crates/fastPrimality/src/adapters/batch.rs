//! Batch adapter with parallel classification.
//!
//! ## Purpose
//!
//! This module wraps the `primality` batch classifier. When parallel
//! execution is enabled (the default), the values of the batch are
//! distributed across the rayon pool and each is tested with the sequential
//! scan. It also accepts `ndarray` inputs through [`PrimalityInput`].
//!
//! ## Invariants
//!
//! * At least one value is required.
//! * Output order matches input order, whatever the execution mode.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::classify_pass_parallel;

// External dependencies
use tracing::debug;

// Export dependencies from primality crate
use primality::internals::adapters::batch::{BatchPrimality, BatchPrimalityBuilder};
use primality::internals::algorithms::scan::ScanMode;
use primality::internals::algorithms::trial::Strategy;
use primality::internals::engine::output::PrimalityResult;
use primality::internals::primitives::candidate::Candidate;
use primality::internals::primitives::errors::PrimalityError;

// Internal dependencies
use crate::input::PrimalityInput;

// ============================================================================
// Extended Batch Builder
// ============================================================================

/// Builder for batch classification with parallel support.
#[derive(Debug, Clone, Copy)]
pub struct ParallelBatchPrimalityBuilder<T> {
    /// Base builder from the primality crate
    pub base: BatchPrimalityBuilder<T>,
}

impl<T> Default for ParallelBatchPrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ParallelBatchPrimalityBuilder<T> {
    fn new() -> Self {
        let base = BatchPrimalityBuilder::default().parallel(true);
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the trial-division strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.base = self.base.strategy(strategy);
        self
    }

    /// Set the sequential scan form used for each value.
    pub fn scan_mode(mut self, mode: ScanMode) -> Self {
        self.base = self.base.scan_mode(mode);
        self
    }

    /// Build the batch classifier.
    pub fn build(self) -> Result<ParallelBatchPrimality<T>, PrimalityError>
    where
        T: Candidate,
    {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_classify_pass(classify_pass_parallel::<T>);
            } else {
                builder.custom_classify_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_classify_pass = None;
        }

        debug!(
            strategy = builder.strategy.name(),
            parallel = builder.custom_classify_pass.is_some(),
            "building batch classifier"
        );

        Ok(ParallelBatchPrimality {
            inner: builder.build()?,
        })
    }
}

// ============================================================================
// Extended Batch Classifier
// ============================================================================

/// Batch primality classifier with parallel support.
#[derive(Debug, Clone, Copy)]
pub struct ParallelBatchPrimality<T> {
    inner: BatchPrimality<T>,
}

impl<T: Candidate> ParallelBatchPrimality<T> {
    /// Classify every value of `values`.
    pub fn classify<I>(&self, values: &I) -> Result<PrimalityResult<T>, PrimalityError>
    where
        I: PrimalityInput<T> + ?Sized,
    {
        let slice = values.as_primality_slice()?;
        self.inner.classify(slice)
    }
}
