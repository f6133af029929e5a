//! Divisibility and trial-division bounds.
//!
//! ## Purpose
//!
//! Trial division needs two primitives: the divisibility predicate and the
//! largest divisor worth testing. The bound is computed as an exact integer
//! square root over `u64`, so `d * d` is never formed and no input near
//! `u64::MAX` can overflow it.
//!
//! ## Invariants
//!
//! * `isqrt(n)² <= n < (isqrt(n) + 1)²` for every `n`.
//! * `sqrt_bound(n)` never overflows: `isqrt(u64::MAX) + 1 == 2^32`.

/// Whether `d` divides `n`. `d` must be non-zero.
#[inline(always)]
pub fn divides(n: u64, d: u64) -> bool {
    n % d == 0
}

/// Floor of the square root of `n`.
#[inline]
pub fn isqrt(n: u64) -> u64 {
    n.isqrt()
}

/// Exclusive upper bound of the divisors `d` with `d * d <= n`.
#[inline]
pub fn sqrt_bound(n: u64) -> u64 {
    isqrt(n) + 1
}

/// Whether `d * d <= n`, evaluated in 128 bits.
#[inline]
pub fn square_at_most(d: u64, n: u64) -> bool {
    (d as u128) * (d as u128) <= n as u128
}
