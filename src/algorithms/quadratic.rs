//! IRLS linearization of the logistic log-likelihood.
//!
//! ## Purpose
//!
//! This module turns the current linear predictor into the per-observation
//! working weight and working response of one Newton step: a weighted
//! least-squares fit on `(w_i, z_i)` approximates the logistic
//! log-likelihood around the current fit. The inner coordinate-descent
//! cycles then solve that weighted-lasso subproblem with `(w, z)` held
//! fixed.
//!
//! ## Design notes
//!
//! * **Formulas**: `p_i = sigmoid(eta_i)`, `w_i = p_i * (1 - p_i)`,
//!   `z_i = eta_i + (y_i - p_i) / w_i`.
//! * **Clamping**: `p_i` is clamped to `[PROBABILITY_FLOOR, 1 - PROBABILITY_FLOOR]`
//!   before forming `w_i`, which bounds the weights away from zero and keeps
//!   the working response finite even for extreme linear predictors.
//! * **Pure**: A function of `(eta, y)` writing into caller-provided slices;
//!   no state.
//!
//! ## Invariants
//!
//! * All four slices have equal length.
//! * Output weights satisfy `w_i > 0`.
//! * Outputs are finite for any finite `eta`.
//!
//! ## Non-goals
//!
//! * This module does not update coefficients (see `algorithms::coordinate`).
//! * This module does not decide when to re-linearize (see `engine::executor`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::link::sigmoid;

// ============================================================================
// Quadratic Approximator
// ============================================================================

/// Builder of the IRLS working weights and working response.
pub struct QuadraticApproximator;

impl QuadraticApproximator {
    /// Floor applied to fitted probabilities before forming weights.
    ///
    /// Value of 1e-5 follows the convention of coordinate-descent lasso
    /// solvers for generalized linear models; it bounds `w = p(1-p)` away
    /// from zero so the working response `(y - p) / w` stays finite.
    const PROBABILITY_FLOOR: f64 = 1e-5;

    /// Fill `weights` and `response` from the current linear predictor.
    pub fn linearize<T: Float>(eta: &[T], y: &[T], weights: &mut [T], response: &mut [T]) {
        let floor = T::from(Self::PROBABILITY_FLOOR).unwrap();
        let ceiling = T::one() - floor;

        for i in 0..eta.len() {
            let p = sigmoid(eta[i]).max(floor).min(ceiling);
            let w = p * (T::one() - p);
            weights[i] = w;
            response[i] = eta[i] + (y[i] - p) / w;
        }
    }
}
