//! Integer inputs for primality testing.
//!
//! ## Purpose
//!
//! Every strategy works on a single widened domain (`u64`). This module maps
//! the primitive integer types onto that domain so callers can pass whatever
//! width they already hold.
//!
//! ## Invariants
//!
//! * Every non-negative value of an implementing type has a `u64` image.
//! * Negative values have no image; they are never prime.
//!
//! ## Non-goals
//!
//! * 128-bit and arbitrary-precision integers are not supported.

// External dependencies
use num_traits::{PrimInt, ToPrimitive};

/// An integer type that can be tested for primality.
pub trait Candidate: PrimInt + Send + Sync {
    /// Widen to the `u64` test domain, or `None` for negative values.
    fn to_candidate(self) -> Option<u64>;
}

macro_rules! impl_candidate {
    ($($t:ty),* $(,)?) => {
        $(
            impl Candidate for $t {
                #[inline]
                fn to_candidate(self) -> Option<u64> {
                    self.to_u64()
                }
            }
        )*
    };
}

impl_candidate!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
