//! Layer 5: Adapters
//!
//! Parallel-capable wrappers around the `primality` adapters. Each wrapper
//! holds the base builder, injects the rayon passes when parallel execution is
//! enabled, and delegates everything else.

/// Single-value tests with a parallel divisor scan.
pub mod single;

/// Batch classification distributed across values.
pub mod batch;

/// Range classification distributed across values.
pub mod range;
