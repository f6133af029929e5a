//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the primality algorithms themselves:
//! - Strategy selection and the pre-scan screen (full range, square-root
//!   bound, 6k±1 filter)
//! - Sequential divisor scans (explicit loop and lazy iterator)
//! - The sieve of Eratosthenes used as the reference oracle
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trial-division strategies.
pub mod trial;

/// Sequential divisor scans.
pub mod scan;

/// Sieve of Eratosthenes.
pub mod sieve;
