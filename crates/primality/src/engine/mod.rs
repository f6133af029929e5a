//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates primality tests:
//! - Resolving a strategy and scan form into an executable configuration
//! - Dispatching to injected scan/classification passes (parallel extensions)
//! - Validating parameters and inputs
//! - Packaging batch results
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine.
pub mod executor;

/// Result structures.
pub mod output;

/// Validation utilities.
pub mod validator;
