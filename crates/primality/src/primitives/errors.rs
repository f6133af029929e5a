//! Error types for primality operations.
//!
//! ## Purpose
//!
//! The primality predicates themselves never fail. This module defines the
//! error conditions of the configuration surface around them: builder
//! parameters, batch and range inputs, and arithmetic helpers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values.
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Range bounds are reported as `i128`, which holds every supported input type.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for primality operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimalityError {
    /// A batch classification was requested for zero values.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Range start lies after range end.
    InvalidRange {
        /// First value of the requested range.
        start: i128,
        /// Last value of the requested range (inclusive).
        end: i128,
    },

    /// Mask reduction needs a power-of-two modulus.
    InvalidModulus(u64),

    /// Sieve limit whose table cannot be allocated.
    InvalidLimit(usize),

    /// Selected adapter does not support the requested feature.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "Single", "Batch").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PrimalityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidRange { start, end } => {
                write!(f, "Invalid range: start {start} is greater than end {end}")
            }
            Self::InvalidModulus(modulus) => {
                write!(f, "Invalid modulus: {modulus} (must be a power of two)")
            }
            Self::InvalidLimit(limit) => {
                write!(f, "Invalid sieve limit: {limit} (table cannot be allocated)")
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for PrimalityError {}
