//! Input validation for primality configuration and data.
//!
//! ## Purpose
//!
//! This module checks builder parameters and batch/range inputs before any
//! test is run. The primality predicates accept every integer, so the checks
//! here only guard the surfaces that can be misused.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Side-effect free**: Validators never modify their inputs.

// Internal dependencies
use crate::primitives::candidate::Candidate;
use crate::primitives::errors::PrimalityError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for primality configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate a batch of values.
    pub fn validate_inputs<T: Candidate>(values: &[T]) -> Result<(), PrimalityError> {
        if values.is_empty() {
            return Err(PrimalityError::EmptyInput);
        }
        Ok(())
    }

    /// Validate an inclusive range.
    pub fn validate_range<T: Candidate>(start: T, end: T) -> Result<(), PrimalityError> {
        if start > end {
            return Err(PrimalityError::InvalidRange {
                start: start.to_i128().unwrap_or(i128::MIN),
                end: end.to_i128().unwrap_or(i128::MAX),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a modulus for mask reduction.
    pub fn validate_modulus(modulus: u64) -> Result<(), PrimalityError> {
        if !modulus.is_power_of_two() {
            return Err(PrimalityError::InvalidModulus(modulus));
        }
        Ok(())
    }

    /// Validate that no parameter was set more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), PrimalityError> {
        if let Some(parameter) = duplicate_param {
            return Err(PrimalityError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
