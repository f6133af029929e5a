//! Trial-division strategies.
//!
//! ## Purpose
//!
//! This module is the single home of the primality mathematics. A
//! [`Strategy`] screens its input with cheap checks and, when those are not
//! conclusive, produces the [`DivisorRange`] that must be free of divisors for
//! the input to be prime. How that range is scanned (loop, lazy iterator, or
//! in parallel) is an execution concern handled elsewhere.
//!
//! ## Key concepts
//!
//! * **Full range**: candidate divisors `[2, n)`.
//! * **Square-root bound**: candidate divisors `[2, isqrt(n)]`.
//! * **6k±1 filter**: 2 and 3 are accepted, values failing the filter are
//!   rejected, everything else falls through to the square-root bound.
//!
//! ## Invariants
//!
//! * Every strategy returns the same answer for every input.
//! * Values below 2 (including negatives) are never prime.
//! * An empty divisor range means the input is prime.

// External dependencies
use core::ops::Range;

// Internal dependencies
use crate::algorithms::scan::ScanMode;
use crate::math::divisor::sqrt_bound;
use crate::math::wheel::passes_six_k_filter;
use crate::primitives::candidate::Candidate;

// ============================================================================
// Divisor Range
// ============================================================================

/// Half-open range `[start, end)` of candidate divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisorRange {
    /// First divisor to test.
    pub start: u64,

    /// One past the last divisor to test.
    pub end: u64,
}

impl DivisorRange {
    /// Create a new divisor range.
    #[inline]
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of divisors in the range.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the range contains no divisors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Iterate over the candidate divisors.
    #[inline]
    pub fn iter(&self) -> Range<u64> {
        self.start..self.end
    }
}

// ============================================================================
// Screen
// ============================================================================

/// Outcome of a strategy's checks before any divisor is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Decided prime without scanning.
    Prime,

    /// Decided not prime without scanning.
    NotPrime,

    /// Prime iff no value in the range divides the input.
    Scan(DivisorRange),
}

// ============================================================================
// Strategy
// ============================================================================

/// Trial-division strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Test every divisor in `[2, n)`.
    FullRange,

    /// Test divisors `d` with `d * d <= n`.
    SqrtBound,

    /// Reject values that are not 6k±1, then test up to the square root.
    #[default]
    SixKFilter,
}

impl Strategy {
    /// All strategies, in increasing order of efficiency.
    pub const ALL: [Strategy; 3] = [Self::FullRange, Self::SqrtBound, Self::SixKFilter];

    /// Short, stable identifier used in reports and benchmark names.
    pub fn name(self) -> &'static str {
        match self {
            Self::FullRange => "full_range",
            Self::SqrtBound => "sqrt_bound",
            Self::SixKFilter => "six_k_filter",
        }
    }

    /// Screen `n` and produce the divisor range left to scan, if any.
    pub fn screen(self, n: u64) -> Screen {
        if n < 2 {
            return Screen::NotPrime;
        }

        match self {
            Self::FullRange => Screen::Scan(DivisorRange::new(2, n)),
            Self::SqrtBound => Screen::Scan(DivisorRange::new(2, sqrt_bound(n))),
            Self::SixKFilter => {
                if n == 2 || n == 3 {
                    Screen::Prime
                } else if !passes_six_k_filter(n) {
                    Screen::NotPrime
                } else {
                    Screen::Scan(DivisorRange::new(2, sqrt_bound(n)))
                }
            }
        }
    }

    /// Decide primality of `n`, delegating any remaining scan to `scan`.
    ///
    /// `scan` receives `n` and a non-empty range and must return `true` iff no
    /// value in the range divides `n`.
    #[inline]
    pub fn decide<F>(self, n: u64, scan: F) -> bool
    where
        F: FnOnce(u64, DivisorRange) -> bool,
    {
        match self.screen(n) {
            Screen::Prime => true,
            Screen::NotPrime => false,
            Screen::Scan(range) if range.is_empty() => true,
            Screen::Scan(range) => scan(n, range),
        }
    }

    /// Test `n` with an explicit-loop scan.
    #[inline]
    pub fn is_prime<T: Candidate>(self, n: T) -> bool {
        self.is_prime_with(n, ScanMode::Loop)
    }

    /// Test `n` with the given sequential scan form.
    #[inline]
    pub fn is_prime_with<T: Candidate>(self, n: T, mode: ScanMode) -> bool {
        n.to_candidate()
            .is_some_and(|n| self.decide(n, |n, range| mode.run(n, range)))
    }
}

/// Test `n` with the default strategy.
#[inline]
pub fn is_prime<T: Candidate>(n: T) -> bool {
    Strategy::default().is_prime(n)
}
