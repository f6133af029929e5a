//! The 6k±1 quick-reject filter.
//!
//! Every prime greater than 3 is congruent to 1 or 5 modulo 6: the other
//! residues are divisible by 2 or 3. The converse does not hold (25 = 6·4 + 1),
//! so the filter is a necessary condition only and a passing value must still
//! be verified by trial division.
//!
//! The residue form is used instead of testing `n - 1` and `n + 1` directly,
//! which would wrap at `0` and `u64::MAX`.

/// Whether `n` is congruent to ±1 modulo 6.
///
/// Only meaningful for `n > 3`; 2 and 3 are prime but fail the filter.
#[inline]
pub fn passes_six_k_filter(n: u64) -> bool {
    matches!(n % 6, 1 | 5)
}
