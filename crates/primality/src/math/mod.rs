//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure integer arithmetic used by the strategies:
//! - Divisibility and the exact square-root bound
//! - The 6k±1 necessary condition for primes above 3
//! - Modulus vs. bitwise-mask reduction by a power of two
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Divisibility and trial-division bounds.
pub mod divisor;

/// The 6k±1 quick-reject filter.
pub mod wheel;

/// Power-of-two reductions.
pub mod modular;
