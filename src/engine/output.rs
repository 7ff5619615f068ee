//! Result type returned by a fit.
//!
//! ## Purpose
//!
//! This module defines `SparseLogitResult`, the public output of a solve:
//! the intercept, the feature coefficients, the convergence status, and
//! optional diagnostics.
//!
//! ## Design notes
//!
//! * **Non-convergence is visible**: `converged` is `false` when the
//!   iteration cap was reached first; the coefficients are still the
//!   best-effort state at the cap, never NaN/Inf.
//! * **Named outputs**: The intercept and the feature coefficients are
//!   separate fields; callers never have to slice a concatenated vector.
//! * **Display**: Prints a human-readable summary block, plus diagnostics
//!   when they were requested.
//!
//! ## Non-goals
//!
//! * This module does not predict on new data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result
// ============================================================================

/// Output of a sparse logistic regression fit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseLogitResult<T> {
    /// Fitted intercept (never penalized).
    pub intercept: T,

    /// Fitted feature coefficients, in column order.
    pub coefficients: Vec<T>,

    /// Whether the outer IRLS loop converged before its cap.
    pub converged: bool,

    /// Number of outer IRLS iterations executed.
    pub iterations: usize,

    /// L1 penalty strength used for the fit.
    pub lambda: T,

    /// Number of observations in the training data.
    pub observations: usize,

    /// Number of feature columns.
    pub features: usize,

    /// Fit-quality statistics (present when requested via the builder).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float + fmt::Display> fmt::Display for SparseLogitResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Observations: {}", self.observations)?;
        writeln!(f, "  Features: {}", self.features)?;
        writeln!(f, "  Lambda: {}", self.lambda)?;
        if self.converged {
            writeln!(f, "  Converged: yes ({} IRLS iterations)", self.iterations)?;
        } else {
            writeln!(
                f,
                "  Converged: NO (iteration cap reached after {})",
                self.iterations
            )?;
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "Diagnostics:")?;
            writeln!(f, "  Log-likelihood:      {}", diag.log_likelihood)?;
            writeln!(f, "  Penalized objective: {}", diag.penalized_objective)?;
            writeln!(f, "  Deviance:            {}", diag.deviance)?;
            writeln!(f, "  Null deviance:       {}", diag.null_deviance)?;
            writeln!(
                f,
                "  Nonzero coefficients: {} / {}",
                diag.nonzero, self.features
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Coefficients:")?;
        writeln!(f, "  (intercept) {}", self.intercept)?;
        for (j, b) in self.coefficients.iter().enumerate() {
            writeln!(f, "  [{}] {}", j, b)?;
        }
        Ok(())
    }
}
