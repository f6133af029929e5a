//! Sequential divisor scans.
//!
//! Both forms answer the same question: does no value in the range divide
//! `n`? They stop at the first divisor found.

// Internal dependencies
use crate::algorithms::trial::DivisorRange;
use crate::math::divisor::divides;

/// Sequential scan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanMode {
    /// Explicit counting loop.
    #[default]
    Loop,

    /// Lazy iterator query ("none of these divide n").
    Lazy,
}

impl ScanMode {
    /// Both sequential forms.
    pub const ALL: [ScanMode; 2] = [Self::Loop, Self::Lazy];

    /// Short, stable identifier used in reports and benchmark names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Loop => "loop",
            Self::Lazy => "lazy",
        }
    }

    /// Run this scan over `range`.
    #[inline]
    pub fn run(self, n: u64, range: DivisorRange) -> bool {
        match self {
            Self::Loop => scan_loop(n, range),
            Self::Lazy => scan_lazy(n, range),
        }
    }
}

/// Scan with an explicit loop.
#[inline]
pub fn scan_loop(n: u64, range: DivisorRange) -> bool {
    let mut d = range.start;
    while d < range.end {
        if divides(n, d) {
            return false;
        }
        d += 1;
    }
    true
}

/// Scan with a lazy iterator.
#[inline]
pub fn scan_lazy(n: u64, range: DivisorRange) -> bool {
    !range.iter().any(|d| divides(n, d))
}
