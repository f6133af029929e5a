//! # fastPrimality
//!
//! Parallel execution for the `primality` crate. The strategies and their
//! answers are exactly those of `primality`; this crate only changes how the
//! work is walked:
//!
//! * **Single**: one value's divisor range is partitioned across CPU cores.
//! * **Batch** / **Range**: the values are distributed across CPU cores and
//!   each is tested sequentially.
//!
//! Parallel execution is the default and can be switched off per builder with
//! `.parallel(false)`. Each parallel call re-dispatches work to the rayon
//! pool, so for small inputs the sequential forms are faster.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastPrimality::prelude::*;
//! use ndarray::Array1;
//!
//! let values = Array1::from_vec((10_000u32..=20_000).collect());
//!
//! let result = Primality::new()
//!     .strategy(SqrtBound)
//!     .adapter(Batch)
//!     .build()?
//!     .classify(&values)?;
//! assert_eq!(result.prime_count, 1033);
//!
//! let test = Primality::new().adapter(Single).build()?;
//! assert!(test.is_prime(104_729u64));
//! assert!(is_prime_parallel(FullRange, 7919u32));
//! # Result::<(), PrimalityError>::Ok(())
//! ```

#![allow(non_snake_case)]

// Layer 4: Engine - parallel execution passes.
mod engine;

// Layer 5: Adapters - parallel-capable execution adapters.
mod adapters;

// High-level fluent API for primality testing.
mod api;

// Input data handling.
mod input;

// Standard fastPrimality prelude.
pub mod prelude {
    #[cfg(feature = "cpu")]
    pub use crate::api::is_prime_parallel;
    pub use crate::api::{
        Adapter::{Batch, Range, Single},
        Candidate, PrimalityBuilder as Primality, PrimalityError, PrimalityInput,
        PrimalityResult, ScanMode,
        ScanMode::{Lazy, Loop},
        Sieve, Strategy,
        Strategy::{FullRange, SixKFilter, SqrtBound},
        is_prime,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
