//! High-level API for primality testing with parallel execution support.
//!
//! ## Purpose
//!
//! This module re-uses the `primality` builder and swaps in adapter markers
//! whose execution builders inject the rayon passes.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `primality` builder pattern.
//! * **Parallel-First**: Every adapter defaults to parallel execution.
//! * **Transparent**: `.parallel(false)` yields exactly the base behavior.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrimalityBuilder`] via `Primality::new()`.
//! 2. Chain configuration methods (`.strategy()`, `.scan_mode()`).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// Internal dependencies
use crate::adapters::batch::ParallelBatchPrimalityBuilder;
use crate::adapters::range::ParallelRangePrimalityBuilder;
use crate::adapters::single::ParallelSinglePrimalityBuilder;

// Import base marker types for delegation
use primality::internals::api::Batch as BaseBatch;
use primality::internals::api::Range as BaseRange;
use primality::internals::api::Single as BaseSingle;

// Publicly re-exported types
pub use crate::adapters::batch::ParallelBatchPrimality;
pub use crate::input::PrimalityInput;
pub use primality::internals::algorithms::scan::ScanMode;
pub use primality::internals::algorithms::sieve::Sieve;
pub use primality::internals::algorithms::trial::{Strategy, is_prime};
pub use primality::internals::api::{PrimalityAdapter, PrimalityBuilder, PrimalityTest};
pub use primality::internals::api::RangePrimality;
pub use primality::internals::engine::output::PrimalityResult;
pub use primality::internals::primitives::candidate::Candidate;
pub use primality::internals::primitives::errors::PrimalityError;

#[cfg(feature = "cpu")]
pub use crate::engine::executor::is_prime_parallel;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Range, Single};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for single-value tests with a parallel divisor scan.
#[derive(Debug, Clone, Copy)]
pub struct Single;

impl<T> PrimalityAdapter<T> for Single {
    type Output = ParallelSinglePrimalityBuilder<T>;

    fn convert(builder: PrimalityBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true
        let parallel = builder.parallel.unwrap_or(true);

        let base = <BaseSingle as PrimalityAdapter<T>>::convert(builder).parallel(parallel);
        ParallelSinglePrimalityBuilder { base }
    }
}

/// Marker for parallel in-memory batch classification.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T> PrimalityAdapter<T> for Batch {
    type Output = ParallelBatchPrimalityBuilder<T>;

    fn convert(builder: PrimalityBuilder<T>) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(true);

        let base = <BaseBatch as PrimalityAdapter<T>>::convert(builder).parallel(parallel);
        ParallelBatchPrimalityBuilder { base }
    }
}

/// Marker for parallel inclusive-range classification.
#[derive(Debug, Clone, Copy)]
pub struct Range;

impl<T> PrimalityAdapter<T> for Range {
    type Output = ParallelRangePrimalityBuilder<T>;

    fn convert(builder: PrimalityBuilder<T>) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(true);

        let base = <BaseRange as PrimalityAdapter<T>>::convert(builder).parallel(parallel);
        ParallelRangePrimalityBuilder { base }
    }
}
