//! Output types for batch and range classification.
//!
//! ## Purpose
//!
//! This module defines [`PrimalityResult`], which pairs every classified value
//! with its primality flag and records how the classification was executed.
//!
//! ## Invariants
//!
//! * `values` and `flags` have the same length and the same order as the input.
//! * `prime_count` equals the number of `true` flags.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::scan::ScanMode;
use crate::algorithms::trial::Strategy;

// ============================================================================
// Result Structure
// ============================================================================

/// Classification of a batch of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimalityResult<T> {
    /// Classified values, in input order.
    pub values: Vec<T>,

    /// `flags[i]` is the primality of `values[i]`.
    pub flags: Vec<bool>,

    /// Number of primes among `values`.
    pub prime_count: usize,

    /// Strategy used.
    pub strategy: Strategy,

    /// Sequential scan form configured (ignored by injected scan passes).
    pub scan_mode: ScanMode,

    /// Whether an injected (parallel) pass executed the classification.
    pub parallel: bool,
}

impl<T: Copy> PrimalityResult<T> {
    /// Assemble a result, counting primes from `flags`.
    pub fn new(
        values: Vec<T>,
        flags: Vec<bool>,
        strategy: Strategy,
        scan_mode: ScanMode,
        parallel: bool,
    ) -> Self {
        let prime_count = flags.iter().filter(|&&p| p).count();
        Self {
            values,
            flags,
            prime_count,
            strategy,
            scan_mode,
            parallel,
        }
    }

    /// Number of classified values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were classified.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values that are not prime.
    pub fn non_prime_count(&self) -> usize {
        self.len() - self.prime_count
    }

    /// The prime values, in input order.
    pub fn primes(&self) -> impl Iterator<Item = T> + '_ {
        self.values
            .iter()
            .zip(&self.flags)
            .filter(|(_, p)| **p)
            .map(|(&v, _)| v)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for PrimalityResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Values:    {}", self.values.len())?;
        writeln!(f, "  Primes:    {}", self.prime_count)?;
        writeln!(f, "  Strategy:  {}", self.strategy.name())?;
        if self.parallel {
            writeln!(f, "  Execution: parallel")?;
        } else {
            writeln!(f, "  Execution: {}", self.scan_mode.name())?;
        }
        writeln!(f)?;

        writeln!(f, "{:>20} {:>8}", "Value", "Prime")?;
        writeln!(f, "{:-<29}", "")?;

        // Show first 10 and last 10 rows if more than 20 values
        let n = self.values.len();
        let skip = if n > 20 { 10..n - 10 } else { n..n };
        for idx in 0..n {
            if skip.contains(&idx) {
                if idx == skip.start {
                    writeln!(f, "{:>20}", "...")?;
                }
                continue;
            }
            writeln!(f, "{:>20} {:>8}", self.values[idx], self.flags[idx])?;
        }

        Ok(())
    }
}
