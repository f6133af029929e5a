#![cfg(feature = "dev")]
//! Tests for input and parameter validation.

use primality::internals::engine::validator::Validator;
use primality::internals::primitives::errors::PrimalityError;

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test that empty batches are rejected.
#[test]
fn test_validate_inputs() {
    let empty: [u32; 0] = [];
    assert_eq!(Validator::validate_inputs(&empty), Err(PrimalityError::EmptyInput));
    assert!(Validator::validate_inputs(&[0u32]).is_ok());
}

/// Test inclusive range validation.
#[test]
fn test_validate_range() {
    assert!(Validator::validate_range(1u32, 100).is_ok());
    assert!(Validator::validate_range(5u32, 5).is_ok());
    assert!(Validator::validate_range(-10i32, 10).is_ok());
    assert_eq!(
        Validator::validate_range(100u32, 1),
        Err(PrimalityError::InvalidRange { start: 100, end: 1 })
    );
    assert_eq!(
        Validator::validate_range(0i64, i64::MIN),
        Err(PrimalityError::InvalidRange {
            start: 0,
            end: i64::MIN as i128
        })
    );
    assert_eq!(
        Validator::validate_range(u64::MAX, 0),
        Err(PrimalityError::InvalidRange {
            start: u64::MAX as i128,
            end: 0
        })
    );
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test power-of-two modulus validation.
#[test]
fn test_validate_modulus() {
    for shift in 0..64 {
        assert!(Validator::validate_modulus(1u64 << shift).is_ok());
    }
    assert_eq!(
        Validator::validate_modulus(0),
        Err(PrimalityError::InvalidModulus(0))
    );
    assert_eq!(
        Validator::validate_modulus(1000),
        Err(PrimalityError::InvalidModulus(1000))
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("strategy")),
        Err(PrimalityError::DuplicateParameter {
            parameter: "strategy"
        })
    );
}

// ============================================================================
// Error Display Tests
// ============================================================================

/// Test that every error renders a message.
#[test]
fn test_error_display() {
    let errs = [
        PrimalityError::EmptyInput,
        PrimalityError::InvalidInput("bad".to_string()),
        PrimalityError::InvalidRange { start: 5, end: 1 },
        PrimalityError::InvalidModulus(6),
        PrimalityError::InvalidLimit(usize::MAX),
        PrimalityError::UnsupportedFeature {
            adapter: "Batch",
            feature: "test",
        },
        PrimalityError::DuplicateParameter {
            parameter: "scan_mode",
        },
    ];
    for e in errs {
        assert!(!format!("{e}").is_empty());
        let _ = format!("{e:?}");
    }

    assert_eq!(
        PrimalityError::InvalidRange { start: 5, end: 1 }.to_string(),
        "Invalid range: start 5 is greater than end 1"
    );
    assert_eq!(
        PrimalityError::InvalidModulus(6).to_string(),
        "Invalid modulus: 6 (must be a power of two)"
    );
    assert_eq!(
        PrimalityError::InvalidLimit(7).to_string(),
        "Invalid sieve limit: 7 (table cannot be allocated)"
    );
}

/// Test the standard error trait object conversion.
#[test]
fn test_error_trait_object() {
    let boxed: Box<dyn std::error::Error> = Box::new(PrimalityError::EmptyInput);
    assert_eq!(boxed.to_string(), "Input is empty");
}
