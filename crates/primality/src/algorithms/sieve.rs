//! Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! The sieve computes primality for every value in `0..=limit` at once. It is
//! the reference oracle that the trial-division strategies are validated
//! against, independent of any of their code paths.
//!
//! ## Invariants
//!
//! * `0` and `1` are never marked prime.
//! * Queries above `limit` return `None` rather than guessing.
//! * A table that cannot be sized or allocated is reported, never wrapped.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::math::divisor::square_at_most;
use crate::primitives::errors::PrimalityError;

/// Primality table for `0..=limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sieve {
    table: Vec<bool>,
}

impl Sieve {
    /// Sieve every value up to and including `limit`.
    ///
    /// # Panics
    ///
    /// Panics if the table for `limit` cannot be allocated; see
    /// [`Sieve::try_new`] for the fallible form.
    pub fn new(limit: usize) -> Self {
        match Self::try_new(limit) {
            Ok(sieve) => sieve,
            Err(err) => panic!("{err}"),
        }
    }

    /// Sieve every value up to and including `limit`, or report a limit whose
    /// table cannot be allocated.
    pub fn try_new(limit: usize) -> Result<Self, PrimalityError> {
        let len = limit
            .checked_add(1)
            .ok_or(PrimalityError::InvalidLimit(limit))?;

        let mut table = Vec::new();
        table
            .try_reserve_exact(len)
            .map_err(|_| PrimalityError::InvalidLimit(limit))?;
        table.resize(len, true);

        table[0] = false;
        if limit >= 1 {
            table[1] = false;
        }

        let mut p = 2usize;
        while square_at_most(p as u64, limit as u64) {
            if table[p] {
                let mut multiple = p * p;
                while multiple <= limit {
                    table[multiple] = false;
                    multiple += p;
                }
            }
            p += 1;
        }

        Ok(Self { table })
    }

    /// Largest value covered by the table.
    pub fn limit(&self) -> usize {
        self.table.len() - 1
    }

    /// Primality of `n`, or `None` if `n` exceeds the limit.
    pub fn is_prime(&self, n: u64) -> Option<bool> {
        usize::try_from(n)
            .ok()
            .and_then(|i| self.table.get(i))
            .copied()
    }

    /// Number of primes in `0..=limit`.
    pub fn count(&self) -> usize {
        self.table.iter().filter(|&&p| p).count()
    }

    /// Number of primes in `start..=end`, clamped to the limit.
    pub fn count_between(&self, start: usize, end: usize) -> usize {
        if start > end || start > self.limit() {
            return 0;
        }
        let end = end.min(self.limit());
        self.table[start..=end].iter().filter(|&&p| p).count()
    }

    /// Iterate over the primes in `0..=limit` in increasing order.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.table
            .iter()
            .enumerate()
            .filter(|(_, p)| **p)
            .map(|(i, _)| i as u64)
    }
}
