//! High-level API for sparse logistic regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the penalty and convergence parameters,
//! and a fitted-model handle whose `fit` method runs the solve.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters; only the data shape (`features`) usually needs setting.
//! * **Validated**: Hyperparameters are checked at `build()`, data at
//!   `fit()`; both fail fast with a typed error.
//! * **Type-Safe**: Generic over `f32`/`f64` via the `FloatSimd` bound.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `SparseLogit::new()` → chain setters →
//!   `.build()?` → `.fit(&x, &y)?`.
//! * **Flattened input**: `x` is the row-major flattened feature matrix;
//!   `x.len()` must equal `y.len() * features`.

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::engine::executor::{SolverConfig, SolverExecutor};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::reductions::FloatSimd;
use crate::primitives::matrix::FeatureMatrix;

// Publicly re-exported types
pub use crate::engine::output::SparseLogitResult;
pub use crate::primitives::errors::SparseLogitError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a sparse logistic regression fit.
///
/// # Example
///
/// ```rust
/// use sparse_logit_rs::prelude::*;
///
/// // Four observations, two features each (row-major flattened).
/// let x = vec![0.2, 1.0, 1.5, -0.4, -0.8, 0.3, 2.1, -1.2];
/// let y = vec![0.0, 1.0, 0.0, 1.0];
///
/// let model = SparseLogit::new()
///     .features(2)
///     .lambda(0.1)
///     .build()?;
///
/// let result = model.fit(&x, &y)?;
/// assert_eq!(result.coefficients.len(), 2);
/// # Result::<(), SparseLogitError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct SparseLogitBuilder<T: FloatSimd + Debug> {
    /// L1 penalty strength (default: 0, no shrinkage).
    pub lambda: T,

    /// Convergence tolerance for both loop levels (default: 1e-7).
    pub tolerance: T,

    /// Iteration cap for both loop levels (default: 100_000).
    pub max_iterations: usize,

    /// Number of feature columns in the flattened input (default: 1).
    pub features: usize,

    /// Whether to compute fit diagnostics (default: false).
    pub return_diagnostics: bool,
}

impl<T: FloatSimd + Debug> Default for SparseLogitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatSimd + Debug> SparseLogitBuilder<T> {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            lambda: T::zero(),
            tolerance: T::from(1e-7).unwrap(),
            max_iterations: 100_000,
            features: 1,
            return_diagnostics: false,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the L1 penalty strength (must be >= 0).
    pub fn lambda(mut self, lambda: T) -> Self {
        self.lambda = lambda;
        self
    }

    /// Set the convergence tolerance (must be > 0).
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration cap applied at both loop levels (must be >= 1).
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the number of feature columns (must be >= 1).
    pub fn features(mut self, features: usize) -> Self {
        self.features = features;
        self
    }

    /// Include fit-quality diagnostics in the result.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = true;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Validate hyperparameters and produce a fit-ready model.
    pub fn build(self) -> Result<SparseLogitModel<T>, SparseLogitError> {
        Validator::validate_lambda(self.lambda)?;
        Validator::validate_tolerance(self.tolerance)?;
        Validator::validate_max_iterations(self.max_iterations)?;
        Validator::validate_features(self.features)?;

        Ok(SparseLogitModel { config: self })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated, fit-ready sparse logistic regression configuration.
#[derive(Debug, Clone)]
pub struct SparseLogitModel<T: FloatSimd + Debug> {
    config: SparseLogitBuilder<T>,
}

impl<T: FloatSimd + Debug> SparseLogitModel<T> {
    /// Fit the model to a flattened row-major feature matrix and a binary
    /// label vector.
    ///
    /// Returns the fitted coefficients with a convergence flag; reaching
    /// the iteration cap is reported through `converged == false`, not as
    /// an error.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<SparseLogitResult<T>, SparseLogitError> {
        Validator::validate_inputs(x, y, self.config.features)?;

        let matrix = FeatureMatrix::new(x, y.len(), self.config.features);
        let solver_config = SolverConfig {
            lambda: self.config.lambda,
            tolerance: self.config.tolerance,
            max_iterations: self.config.max_iterations,
        };

        let output = SolverExecutor::run_with_config(&matrix, y, &solver_config);

        let diagnostics = if self.config.return_diagnostics {
            Some(Diagnostics::compute(
                &matrix,
                y,
                output.intercept,
                &output.coefficients,
                self.config.lambda,
            ))
        } else {
            None
        };

        Ok(SparseLogitResult {
            intercept: output.intercept,
            coefficients: output.coefficients,
            converged: output.converged,
            iterations: output.iterations,
            lambda: self.config.lambda,
            observations: y.len(),
            features: self.config.features,
            diagnostics,
        })
    }
}
