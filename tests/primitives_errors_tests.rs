#![cfg(feature = "dev")]
//! Tests for the error enum: Display strings, equality, and the std
//! Error impl.

use sparse_logit_rs::internals::primitives::errors::SparseLogitError;

// ============================================================================
// Display Strings
// ============================================================================

/// Every variant renders its stable Display string.
#[test]
fn test_display_strings() {
    assert_eq!(
        SparseLogitError::EmptyInput.to_string(),
        "Input arrays are empty"
    );
    assert_eq!(
        SparseLogitError::MismatchedInputs { x_len: 7, y_len: 3 }.to_string(),
        "Length mismatch: x has 7 values, y has 3 labels"
    );
    assert_eq!(
        SparseLogitError::TooFewObservations { got: 1, min: 2 }.to_string(),
        "Too few observations: got 1, need at least 2"
    );
    assert_eq!(
        SparseLogitError::InvalidFeatureCount(0).to_string(),
        "Invalid feature count: 0 (must be at least 1)"
    );
    assert_eq!(
        SparseLogitError::InvalidLambda(-1.0).to_string(),
        "Invalid lambda: -1 (must be >= 0 and finite)"
    );
    assert_eq!(
        SparseLogitError::InvalidTolerance(0.0).to_string(),
        "Invalid tolerance: 0 (must be > 0 and finite)"
    );
    assert_eq!(
        SparseLogitError::InvalidMaxIterations(0).to_string(),
        "Invalid max_iterations: 0 (must be at least 1)"
    );
    assert_eq!(
        SparseLogitError::InvalidLabel {
            index: 4,
            value: 2.0
        }
        .to_string(),
        "Invalid label at index 4: 2 (labels must be exactly 0 or 1)"
    );
    assert_eq!(
        SparseLogitError::InvalidNumericValue("x[3]=NaN".into()).to_string(),
        "Invalid numeric value: x[3]=NaN"
    );
}

// ============================================================================
// Trait Impls
// ============================================================================

/// Errors are cloneable and comparable for test assertions.
#[test]
fn test_clone_and_eq() {
    let e = SparseLogitError::MismatchedInputs { x_len: 4, y_len: 2 };
    assert_eq!(e.clone(), e);
    assert_ne!(e, SparseLogitError::EmptyInput);
}

/// The std Error trait is implemented, so the enum boxes cleanly.
#[cfg(feature = "std")]
#[test]
fn test_std_error() {
    let boxed: Box<dyn std::error::Error> = Box::new(SparseLogitError::EmptyInput);
    assert_eq!(boxed.to_string(), "Input arrays are empty");
}
