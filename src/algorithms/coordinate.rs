//! Cyclic coordinate-descent pass over intercept and feature coefficients.
//!
//! ## Purpose
//!
//! This module performs one full Gauss–Seidel pass over the coordinates of
//! the weighted-lasso subproblem produced by the IRLS linearization: the
//! intercept first (as an implicit column of ones), then every feature
//! coefficient in order, each updated via weighted least squares plus
//! shrinkage while all others are held fixed.
//!
//! ## Design notes
//!
//! * **Update**: For coordinate `j`, the weighted correlation with the
//!   partial residual is `s = sum_i w_i x_ij (z_i - eta_i) + b_j c` with
//!   curvature `c = sum_i w_i x_ij^2`; the new value is
//!   `soft_threshold(s, lambda * penalty_factor) / c`.
//! * **Penalty factor**: Zero for the intercept (it is never shrunk,
//!   whatever the class balance), one for every feature coordinate.
//! * **Gauss–Seidel ordering**: `eta` is updated immediately after each
//!   coordinate, so later coordinates in the same pass see already-updated
//!   earlier ones. This ordering is what the convergence guarantee of
//!   coordinate descent on the convex subproblem relies on, and it is why
//!   coordinates cannot be processed in parallel.
//! * **Degenerate columns**: A coordinate whose curvature falls below
//!   `CURVATURE_FLOOR` is skipped unchanged for the pass.
//!
//! ## Invariants
//!
//! * On entry and exit, `eta_i == b0 + sum_j b_j x_ij` for all `i`.
//! * Working weights and response are read-only during a pass.
//!
//! ## Non-goals
//!
//! * This module does not track convergence (see `engine::convergence`).
//! * This module does not re-linearize (see `engine::executor`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::reductions::FloatSimd;
use crate::math::threshold::soft_threshold;

// ============================================================================
// Coordinate Updater
// ============================================================================

/// One-cycle coordinate updater for the weighted-lasso subproblem.
pub struct CoordinateUpdater;

impl CoordinateUpdater {
    /// Minimum curvature below which a coordinate is considered degenerate
    /// and skipped to avoid division by (numerically) zero.
    const CURVATURE_FLOOR: f64 = 1e-12;

    /// Run one cyclic pass, mutating `intercept`, `coefficients`, and `eta`
    /// in place.
    ///
    /// `columns` is the column-major feature copy (`coefficients.len() *
    /// rows` values); `weights` and `response` are the fixed IRLS working
    /// quantities for the current linearization.
    #[allow(clippy::too_many_arguments)]
    pub fn cyclic_pass<T: FloatSimd>(
        columns: &[T],
        rows: usize,
        weights: &[T],
        response: &[T],
        eta: &mut [T],
        intercept: &mut T,
        coefficients: &mut [T],
        lambda: T,
    ) {
        let floor = T::from(Self::CURVATURE_FLOOR).unwrap();

        // Intercept coordinate: implicit column of ones, penalty factor zero.
        let curvature = T::sum(weights);
        if curvature > floor {
            let correlation =
                T::weighted_residual_sum(weights, response, eta) + *intercept * curvature;
            let updated = soft_threshold(correlation, T::zero()) / curvature;
            let shift = updated - *intercept;
            if shift != T::zero() {
                for e in eta.iter_mut() {
                    *e = *e + shift;
                }
                *intercept = updated;
            }
        }

        // Feature coordinates, in order, with immediate eta updates.
        for j in 0..coefficients.len() {
            let column = &columns[j * rows..(j + 1) * rows];

            let curvature = T::weighted_square_dot(weights, column);
            if curvature <= floor {
                continue;
            }

            let correlation = T::weighted_residual_dot(weights, column, response, eta)
                + coefficients[j] * curvature;
            let updated = soft_threshold(correlation, lambda) / curvature;
            let shift = updated - coefficients[j];
            if shift != T::zero() {
                for (e, &x) in eta.iter_mut().zip(column.iter()) {
                    *e = *e + shift * x;
                }
                coefficients[j] = updated;
            }
        }
    }
}
