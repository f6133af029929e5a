//! High-level API for primality testing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing a strategy and scan form, and an adapter
//! selection step (Single, Batch, or Range) that yields an execution builder.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Every parameter has a default; `Primality::new()` alone is
//!   a working configuration.
//! * **Polymorphic**: Marker types transition to specialized adapter builders.
//! * **Validated**: Misuse is recorded and reported by `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrimalityBuilder`] via `Primality::new()`.
//! 2. Chain configuration methods (`.strategy()`, `.scan_mode()`).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Internal dependencies
use crate::adapters::batch::BatchPrimalityBuilder;
use crate::adapters::range::RangePrimalityBuilder;
use crate::adapters::single::SinglePrimalityBuilder;
use crate::engine::executor::{ClassifyPassFn, ScanPassFn};

// Publicly re-exported types
pub use crate::adapters::batch::BatchPrimality;
pub use crate::adapters::range::RangePrimality;
pub use crate::adapters::single::PrimalityTest;
pub use crate::algorithms::scan::ScanMode;
pub use crate::algorithms::sieve::Sieve;
pub use crate::algorithms::trial::{Strategy, is_prime};
pub use crate::engine::output::PrimalityResult;
pub use crate::math::modular::{mask_for, rem_mask, rem_mod};
pub use crate::primitives::candidate::Candidate;
pub use crate::primitives::errors::PrimalityError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Range, Single};
}

/// Fluent builder for configuring primality tests and execution modes.
#[derive(Debug, Clone, Copy)]
pub struct PrimalityBuilder<T> {
    /// Trial-division strategy.
    pub strategy: Option<Strategy>,

    /// Sequential scan form.
    pub scan_mode: Option<ScanMode>,

    // ======================================
    // DEV
    // ======================================
    /// Custom scan pass function.
    #[doc(hidden)]
    pub custom_scan_pass: Option<ScanPassFn>,

    /// Custom classification pass function.
    #[doc(hidden)]
    pub custom_classify_pass: Option<ClassifyPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T> Default for PrimalityBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PrimalityBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: PrimalityAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            strategy: None,
            scan_mode: None,
            custom_scan_pass: None,
            custom_classify_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the trial-division strategy (default: `SixKFilter`).
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Set the sequential scan form (default: `Loop`).
    pub fn scan_mode(mut self, mode: ScanMode) -> Self {
        if self.scan_mode.is_some() {
            self.duplicate_param = Some("scan_mode");
        }
        self.scan_mode = Some(mode);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom scan pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_scan_pass(mut self, pass: ScanPassFn) -> Self {
        self.custom_scan_pass = Some(pass);
        self
    }

    /// Set a custom classification pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_classify_pass(mut self, pass: ClassifyPassFn<T>) -> Self {
        self.custom_classify_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait PrimalityAdapter<T> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`PrimalityBuilder`] into a specialized execution builder.
    fn convert(builder: PrimalityBuilder<T>) -> Self::Output;
}

/// Marker for testing one value at a time.
#[derive(Debug, Clone, Copy)]
pub struct Single;

impl<T> PrimalityAdapter<T> for Single {
    type Output = SinglePrimalityBuilder<T>;

    fn convert(builder: PrimalityBuilder<T>) -> Self::Output {
        let mut result = SinglePrimalityBuilder::default();

        if let Some(strategy) = builder.strategy {
            result.strategy = strategy;
        }
        if let Some(mode) = builder.scan_mode {
            result.scan_mode = mode;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(sp) = builder.custom_scan_pass {
            result.custom_scan_pass = Some(sp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for in-memory batch classification.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T> PrimalityAdapter<T> for Batch {
    type Output = BatchPrimalityBuilder<T>;

    fn convert(builder: PrimalityBuilder<T>) -> Self::Output {
        let mut result = BatchPrimalityBuilder::default();

        if let Some(strategy) = builder.strategy {
            result.strategy = strategy;
        }
        if let Some(mode) = builder.scan_mode {
            result.scan_mode = mode;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(sp) = builder.custom_scan_pass {
            result.custom_scan_pass = Some(sp);
        }
        if let Some(cp) = builder.custom_classify_pass {
            result.custom_classify_pass = Some(cp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for inclusive-range classification.
#[derive(Debug, Clone, Copy)]
pub struct Range;

impl<T> PrimalityAdapter<T> for Range {
    type Output = RangePrimalityBuilder<T>;

    fn convert(builder: PrimalityBuilder<T>) -> Self::Output {
        let mut result = RangePrimalityBuilder::default();

        if let Some(strategy) = builder.strategy {
            result.strategy = strategy;
        }
        if let Some(mode) = builder.scan_mode {
            result.scan_mode = mode;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(sp) = builder.custom_scan_pass {
            result.custom_scan_pass = Some(sp);
        }
        if let Some(cp) = builder.custom_classify_pass {
            result.custom_classify_pass = Some(cp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
