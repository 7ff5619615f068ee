//! Fit-quality diagnostics for a solved model.
//!
//! ## Purpose
//!
//! This module computes optional post-fit statistics: the unpenalized
//! log-likelihood, the penalized objective the solver minimizes, the
//! residual and null deviances, and the number of nonzero feature
//! coefficients (the sparsity the L1 penalty bought).
//!
//! ## Design notes
//!
//! * **Opt-in**: Computed only when requested through the builder, since it
//!   costs one extra pass over the data.
//! * **Stability**: Log-likelihood terms use the stable `log1p_exp`
//!   decomposition; the null model's base rate is clamped away from 0 and 1
//!   so single-class label vectors stay finite.
//!
//! ## Non-goals
//!
//! * This module does not perform inference (standard errors, p-values).
//! * This module does not score held-out data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::link::{log1p_exp, log_odds};
use crate::primitives::matrix::FeatureMatrix;

// ============================================================================
// Diagnostics
// ============================================================================

/// Post-fit statistics for a sparse logistic model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics<T> {
    /// Unpenalized logistic log-likelihood at the fitted coefficients.
    pub log_likelihood: T,

    /// Penalized objective: negative log-likelihood plus
    /// `lambda * sum_j |b_j|` (intercept excluded from the penalty).
    pub penalized_objective: T,

    /// Residual deviance, `-2 * log_likelihood`.
    pub deviance: T,

    /// Deviance of the intercept-only (base-rate) model.
    pub null_deviance: T,

    /// Number of feature coefficients that are not exactly zero.
    pub nonzero: usize,
}

impl<T: Float> Diagnostics<T> {
    /// Clamp applied to the null model's base rate so single-class label
    /// vectors produce a finite null deviance.
    const BASE_RATE_FLOOR: f64 = 1e-12;

    /// Compute diagnostics for fitted coefficients on the training data.
    pub fn compute(
        x: &FeatureMatrix<'_, T>,
        y: &[T],
        intercept: T,
        coefficients: &[T],
        lambda: T,
    ) -> Self {
        let n = x.rows();
        let two = T::from(2.0).unwrap();

        // Linear predictor per observation from the fitted coefficients.
        let eta: Vec<T> = (0..n)
            .map(|i| {
                let mut acc = intercept;
                for (&b, &v) in coefficients.iter().zip(x.row(i).iter()) {
                    acc = acc + b * v;
                }
                acc
            })
            .collect();

        let log_likelihood = Self::binomial_log_likelihood(&eta, y);

        let l1_norm = coefficients
            .iter()
            .fold(T::zero(), |acc, &b| acc + b.abs());
        let penalized_objective = -log_likelihood + lambda * l1_norm;

        // Intercept-only reference model at the clamped class base rate.
        let floor = T::from(Self::BASE_RATE_FLOOR).unwrap();
        let base_rate = (y.iter().fold(T::zero(), |acc, &v| acc + v)
            / T::from(n).unwrap())
        .max(floor)
        .min(T::one() - floor);
        let null_eta = log_odds(base_rate);
        let null_log_likelihood = y
            .iter()
            .fold(T::zero(), |acc, &yi| acc + yi * null_eta - log1p_exp(null_eta));

        let nonzero = coefficients.iter().filter(|b| !b.is_zero()).count();

        Self {
            log_likelihood,
            penalized_objective,
            deviance: -two * log_likelihood,
            null_deviance: -two * null_log_likelihood,
            nonzero,
        }
    }

    /// Logistic log-likelihood `sum_i [y_i eta_i - ln(1 + exp(eta_i))]`.
    fn binomial_log_likelihood(eta: &[T], y: &[T]) -> T {
        let mut acc = T::zero();
        for (&e, &yi) in eta.iter().zip(y.iter()) {
            acc = acc + yi * e - log1p_exp(e);
        }
        acc
    }
}
