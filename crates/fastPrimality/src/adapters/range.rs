//! Range adapter with parallel classification.
//!
//! This module wraps the `primality` range classifier; the values of the
//! range are distributed across the rayon pool when parallel execution is
//! enabled (the default).

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::classify_pass_parallel;

// External dependencies
use tracing::debug;

// Export dependencies from primality crate
use primality::internals::adapters::range::{RangePrimality, RangePrimalityBuilder};
use primality::internals::algorithms::scan::ScanMode;
use primality::internals::algorithms::trial::Strategy;
use primality::internals::primitives::candidate::Candidate;
use primality::internals::primitives::errors::PrimalityError;

/// Builder for range classification with parallel support.
#[derive(Debug, Clone, Copy)]
pub struct ParallelRangePrimalityBuilder<T> {
    /// Base builder from the primality crate
    pub base: RangePrimalityBuilder<T>,
}

impl<T> Default for ParallelRangePrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ParallelRangePrimalityBuilder<T> {
    fn new() -> Self {
        let base = RangePrimalityBuilder::default().parallel(true);
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

    /// Build the range classifier.
    pub fn build(self) -> Result<RangePrimality<T>, PrimalityError>
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
            "building range classifier"
        );

        builder.build()
    }
}
