//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing execution modes over the engine:
//!
//! - **Single**: Test one value at a time
//! - **Batch**: Classify a slice of values
//! - **Range**: Classify or count an inclusive range of values
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-value primality tests.
pub mod single;

/// Batch classification.
pub mod batch;

/// Inclusive-range classification.
pub mod range;
