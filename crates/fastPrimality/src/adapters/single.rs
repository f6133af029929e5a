//! Single-value adapter with a parallel divisor scan.
//!
//! ## Purpose
//!
//! This module wraps the `primality` single-value builder. When parallel
//! execution is enabled (the default), the divisor range of each test is
//! partitioned across the rayon pool; otherwise the configured sequential
//! scan form is used.
//!
//! ## Invariants
//!
//! * Parallel and sequential tests return the same answer for every input.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::scan_pass_parallel;

// External dependencies
use tracing::debug;

// Export dependencies from primality crate
use primality::internals::adapters::single::{PrimalityTest, SinglePrimalityBuilder};
use primality::internals::algorithms::scan::ScanMode;
use primality::internals::algorithms::trial::Strategy;
use primality::internals::primitives::errors::PrimalityError;

// ============================================================================
// Extended Single Builder
// ============================================================================

/// Builder for single-value tests with parallel support.
#[derive(Debug, Clone, Copy)]
pub struct ParallelSinglePrimalityBuilder<T> {
    /// Base builder from the primality crate
    pub base: SinglePrimalityBuilder<T>,
}

impl<T> Default for ParallelSinglePrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ParallelSinglePrimalityBuilder<T> {
    fn new() -> Self {
        let base = SinglePrimalityBuilder::default().parallel(true);
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

    /// Set the sequential scan form (used when parallel execution is off).
    pub fn scan_mode(mut self, mode: ScanMode) -> Self {
        self.base = self.base.scan_mode(mode);
        self
    }

    /// Build the test.
    pub fn build(self) -> Result<PrimalityTest<T>, PrimalityError> {
        let mut builder = self.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_scan_pass(scan_pass_parallel);
            } else {
                builder.custom_scan_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_scan_pass = None;
        }

        debug!(
            strategy = builder.strategy.name(),
            parallel = builder.custom_scan_pass.is_some(),
            "building single-value test"
        );

        builder.build()
    }
}
