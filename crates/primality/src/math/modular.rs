//! Power-of-two reductions.
//!
//! ## Purpose
//!
//! For a power-of-two modulus `m`, `x % m` and `x & (m - 1)` agree on every
//! non-negative `x`. The benchmarks compare the two forms; this module holds
//! them so both sides of the comparison are the same code the tests check.
//!
//! ## Invariants
//!
//! * `rem_mask(x, mask_for(m)?) == rem_mod(x, m)` for every power of two `m`.
//! * `mask_for` rejects zero and every modulus that is not a power of two.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::PrimalityError;

/// Reduce `x` with the remainder operator.
#[inline]
pub fn rem_mod(x: u64, modulus: u64) -> u64 {
    x % modulus
}

/// Reduce `x` with a bitwise mask produced by [`mask_for`].
#[inline]
pub fn rem_mask(x: u64, mask: u64) -> u64 {
    x & mask
}

/// The mask equivalent to reducing by `modulus`.
pub fn mask_for(modulus: u64) -> Result<u64, PrimalityError> {
    Validator::validate_modulus(modulus)?;
    Ok(modulus - 1)
}
