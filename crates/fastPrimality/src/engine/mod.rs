//! Layer 4: Engine
//!
//! This layer provides the parallel execution passes injected into the
//! `primality` crate's executor.

// Parallel execution passes using CPU threads
#[cfg(feature = "cpu")]
pub mod executor;
