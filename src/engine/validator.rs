//! Input validation for solver configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for the hyperparameters and
//! the input data. It checks requirements such as input lengths, finite
//! values, binary labels, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces lambda >= 0, tolerance > 0, and a
//!   positive iteration cap.
//! * **Label Domain**: Every label must be exactly 0 or 1.
//! * **Finite Checks**: Ensures feature values are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or standardize input data.
//! * This module does not perform the optimization itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SparseLogitError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for solver configuration and input data.
///
/// Provides static methods for validating hyperparameters and input data.
/// All methods return `Result<(), SparseLogitError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Minimum number of observations required for a fit.
    const MIN_OBSERVATIONS: usize = 2;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the feature array and label vector for fitting.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        features: usize,
    ) -> Result<(), SparseLogitError> {
        // Check 1: Non-empty arrays
        if x.is_empty() || y.is_empty() {
            return Err(SparseLogitError::EmptyInput);
        }

        // Check 2: Matching lengths (x.len() should be y.len() * features)
        let n = y.len();
        if x.len() != n * features {
            return Err(SparseLogitError::MismatchedInputs {
                x_len: x.len(),
                y_len: n,
            });
        }

        // Check 3: Sufficient observations
        if n < Self::MIN_OBSERVATIONS {
            return Err(SparseLogitError::TooFewObservations {
                got: n,
                min: Self::MIN_OBSERVATIONS,
            });
        }

        // Check 4: Binary labels
        for (i, &label) in y.iter().enumerate() {
            if label != T::zero() && label != T::one() {
                return Err(SparseLogitError::InvalidLabel {
                    index: i,
                    value: label.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        // Check 5: All feature values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(SparseLogitError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the L1 penalty strength.
    pub fn validate_lambda<T: Float>(lambda: T) -> Result<(), SparseLogitError> {
        if !lambda.is_finite() || lambda < T::zero() {
            return Err(SparseLogitError::InvalidLambda(
                lambda.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), SparseLogitError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(SparseLogitError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the iteration cap (applies at both loop levels).
    pub fn validate_max_iterations(max_iterations: usize) -> Result<(), SparseLogitError> {
        if max_iterations == 0 {
            return Err(SparseLogitError::InvalidMaxIterations(max_iterations));
        }
        Ok(())
    }

    /// Validate the configured number of feature columns.
    pub fn validate_features(features: usize) -> Result<(), SparseLogitError> {
        if features == 0 {
            return Err(SparseLogitError::InvalidFeatureCount(features));
        }
        Ok(())
    }
}
