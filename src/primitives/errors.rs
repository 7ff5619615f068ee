//! Error types for sparse logistic regression.
//!
//! ## Purpose
//!
//! This module defines the typed error enum returned by the builder, the
//! validator, and the `fit` entry point. Every failure mode is reported
//! through a dedicated variant carrying the offending values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors are produced before any solving begins; there is
//!   no partial result attached to an error.
//! * **Testable**: Implements `Clone` and `PartialEq` so tests can assert
//!   exact variants, and `Display` strings are stable.
//! * **no_std**: `Display` is implemented via `core::fmt`;
//!   `std::error::Error` is provided under the `std` feature.
//!
//! ## Key concepts
//!
//! * **Non-convergence is not an error**: hitting the iteration cap returns
//!   a result flagged `converged == false` rather than an `Err` (callers
//!   must be able to inspect the capped coefficients).
//!
//! ## Non-goals
//!
//! * This module does not perform validation itself (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors produced while configuring or fitting a sparse logistic model.
#[derive(Debug, Clone, PartialEq)]
pub enum SparseLogitError {
    /// Input arrays are empty.
    EmptyInput,

    /// The flattened feature array length does not equal `labels * features`.
    MismatchedInputs {
        /// Length of the flattened feature array.
        x_len: usize,
        /// Length of the label vector.
        y_len: usize,
    },

    /// Too few observations for a meaningful fit.
    TooFewObservations {
        /// Number of observations provided.
        got: usize,
        /// Minimum number required.
        min: usize,
    },

    /// The configured feature count is zero.
    InvalidFeatureCount(usize),

    /// The L1 penalty strength is negative or non-finite.
    InvalidLambda(f64),

    /// The convergence tolerance is non-positive or non-finite.
    InvalidTolerance(f64),

    /// The iteration cap is zero.
    InvalidMaxIterations(usize),

    /// A label is not exactly 0 or 1.
    InvalidLabel {
        /// Index of the offending label.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A non-finite value (NaN or infinity) was found in the feature matrix.
    InvalidNumericValue(String),
}

impl fmt::Display for SparseLogitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(
                    f,
                    "Length mismatch: x has {} values, y has {} labels",
                    x_len, y_len
                )
            }
            Self::TooFewObservations { got, min } => {
                write!(f, "Too few observations: got {}, need at least {}", got, min)
            }
            Self::InvalidFeatureCount(n) => {
                write!(f, "Invalid feature count: {} (must be at least 1)", n)
            }
            Self::InvalidLambda(v) => {
                write!(f, "Invalid lambda: {} (must be >= 0 and finite)", v)
            }
            Self::InvalidTolerance(v) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", v)
            }
            Self::InvalidMaxIterations(n) => {
                write!(f, "Invalid max_iterations: {} (must be at least 1)", n)
            }
            Self::InvalidLabel { index, value } => {
                write!(
                    f,
                    "Invalid label at index {}: {} (labels must be exactly 0 or 1)",
                    index, value
                )
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SparseLogitError {}
