//! # primality
//!
//! Trial-division primality tests with interchangeable strategies and
//! interchangeable scan forms.
//!
//! ## Strategies
//!
//! | Strategy      | Divisors tested                    | Pre-checks                      |
//! |---------------|------------------------------------|---------------------------------|
//! | `FullRange`   | every `d` in `[2, n)`              | none                            |
//! | `SqrtBound`   | every `d` with `d * d <= n`        | none                            |
//! | `SixKFilter`  | every `d` with `d * d <= n`        | 2, 3 accepted; non-6k±1 rejected |
//!
//! Every strategy returns the same answer for every input, and values below 2
//! (including negative values of signed types) are never prime.
//!
//! ## Scan forms
//!
//! The divisor range a strategy leaves to check can be walked with an
//! explicit loop (`ScanMode::Loop`) or a lazy iterator
//! (`ScanMode::Lazy`). The `fastPrimality` crate adds a
//! data-parallel form on top of the same strategies.
//!
//! ## Quick Start
//!
//! ```rust
//! use primality::prelude::*;
//!
//! assert!(is_prime(97u32));
//! assert!(!SqrtBound.is_prime(91u32));
//!
//! let test = Primality::new()
//!     .strategy(FullRange)
//!     .scan_mode(Lazy)
//!     .adapter(Single)
//!     .build()?;
//! assert!(test.is_prime(7919u64));
//!
//! let result = Primality::new().adapter(Range).build()?.classify(1u32, 100)?;
//! assert_eq!(result.prime_count, 25);
//! # Result::<(), PrimalityError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! The predicates return `bool` and never fail. Builders and batch/range
//! classification return `Result<_, PrimalityError>` for misuse such as a
//! reversed range, an empty batch, or a parameter configured twice.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - input abstraction and errors.
mod primitives;

// Layer 2: Math - pure integer arithmetic.
mod math;

// Layer 3: Algorithms - strategies, scans and the sieve.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for primality testing.
mod api;

// Standard primality prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Range, Single},
        BatchPrimality, Candidate, PrimalityBuilder as Primality, PrimalityError,
        PrimalityResult, PrimalityTest, RangePrimality, ScanMode,
        ScanMode::{Lazy, Loop},
        Sieve, Strategy,
        Strategy::{FullRange, SixKFilter, SqrtBound},
        is_prime, mask_for, rem_mask, rem_mod,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
