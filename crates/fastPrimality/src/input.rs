//! Input abstractions for batch classification.
//!
//! ## Purpose
//!
//! This module lets `classify` accept slices, vectors and `ndarray` arrays
//! through a single interface.
//!
//! ## Invariants
//!
//! * Returned slices cover all elements of the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};

// Export dependencies from primality crate
use primality::internals::primitives::candidate::Candidate;
use primality::internals::primitives::errors::PrimalityError;

/// Trait for types that can be classified as a batch.
pub trait PrimalityInput<T: Candidate> {
    /// Convert the input to a contiguous slice.
    fn as_primality_slice(&self) -> Result<&[T], PrimalityError>;
}

impl<T: Candidate> PrimalityInput<T> for [T] {
    fn as_primality_slice(&self) -> Result<&[T], PrimalityError> {
        Ok(self)
    }
}

impl<T: Candidate> PrimalityInput<T> for Vec<T> {
    fn as_primality_slice(&self) -> Result<&[T], PrimalityError> {
        Ok(self.as_slice())
    }
}

impl<T: Candidate, S> PrimalityInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_primality_slice(&self) -> Result<&[T], PrimalityError> {
        self.as_slice().ok_or_else(|| {
            PrimalityError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
