//! Execution engine for the IRLS + coordinate-descent solve.
//!
//! ## Purpose
//!
//! This module orchestrates the two-level loop that fits the model: an
//! outer loop that re-linearizes the logistic log-likelihood into a
//! weighted least-squares problem around the current coefficients, and an
//! inner loop of cyclic coordinate-descent passes that solves each
//! weighted-lasso subproblem to tolerance. The executor owns the
//! coefficient state and all working buffers.
//!
//! ## Design notes
//!
//! * **Two levels, never collapsed**: The working weights and response are
//!   fixed while the inner cycles run, so each subproblem stays convex.
//!   Recomputing them inside the coordinate loop would forfeit the
//!   convergence guarantee.
//! * **Independent caps**: `max_iterations` bounds the outer
//!   re-linearizations and the inner cycles separately; both levels use
//!   the same tolerance.
//! * **Drift control**: `eta` is maintained incrementally inside the
//!   cycles and recomputed from scratch at the start of every outer
//!   iteration.
//! * **Deterministic**: Zero-initialized state, fixed coordinate order, no
//!   randomness; identical inputs produce bit-identical outputs.
//!
//! ## Invariants
//!
//! * Working buffers have the same length as the label vector.
//! * Coefficient snapshots are taken before any mutation in a cycle.
//! * The returned state is the exact state at termination, converged or not.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not format results (handled by `output` and `api`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::coordinate::CoordinateUpdater;
use crate::algorithms::quadratic::QuadraticApproximator;
use crate::engine::convergence::{coefficient_delta, ConvergenceMonitor, ConvergenceState};
use crate::math::reductions::FloatSimd;
use crate::primitives::buffer::SolverBuffer;
use crate::primitives::matrix::FeatureMatrix;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one solve.
#[derive(Debug, Clone)]
pub struct SolverConfig<T> {
    /// L1 penalty strength (>= 0; 0 disables shrinkage).
    pub lambda: T,

    /// Convergence tolerance on the per-cycle coefficient delta.
    pub tolerance: T,

    /// Hard cycle cap, applied independently at each loop level.
    pub max_iterations: usize,
}

// ============================================================================
// Output
// ============================================================================

/// Raw output of one solve.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Fitted intercept.
    pub intercept: T,

    /// Fitted feature coefficients, one per column.
    pub coefficients: Vec<T>,

    /// Number of outer IRLS iterations executed.
    pub iterations: usize,

    /// Whether the outer loop converged before hitting its cap.
    pub converged: bool,
}

// ============================================================================
// Solver Executor
// ============================================================================

/// Orchestrator of the outer IRLS / inner coordinate-descent loops.
pub struct SolverExecutor;

impl SolverExecutor {
    /// Fit the model for validated inputs.
    pub fn run_with_config<T: FloatSimd + Debug>(
        x: &FeatureMatrix<'_, T>,
        y: &[T],
        config: &SolverConfig<T>,
    ) -> ExecutorOutput<T> {
        let n = x.rows();
        let p = x.cols();

        let mut buffer = SolverBuffer::new(n, p);
        buffer.load_columns(x);

        let mut intercept = T::zero();
        let mut coefficients = vec![T::zero(); p];

        let mut outer = ConvergenceMonitor::new(config.tolerance, config.max_iterations);
        let mut converged = false;

        loop {
            Self::snapshot(&mut buffer.outer_snapshot, intercept, &coefficients);

            // Re-linearize around the current fit: recompute eta from
            // scratch, then derive working weights and response.
            Self::recompute_eta(&mut buffer, intercept, &coefficients, n);
            QuadraticApproximator::linearize(
                &buffer.eta,
                y,
                &mut buffer.weights,
                &mut buffer.response,
            );

            // Inner loop: solve the weighted-lasso subproblem with the
            // working quantities held fixed.
            let mut inner = ConvergenceMonitor::new(config.tolerance, config.max_iterations);
            loop {
                Self::snapshot(&mut buffer.cycle_snapshot, intercept, &coefficients);
                CoordinateUpdater::cyclic_pass(
                    &buffer.columns,
                    n,
                    &buffer.weights,
                    &buffer.response,
                    &mut buffer.eta,
                    &mut intercept,
                    &mut coefficients,
                    config.lambda,
                );
                let delta = coefficient_delta(&buffer.cycle_snapshot, intercept, &coefficients);
                match inner.record(delta) {
                    ConvergenceState::Continue => {}
                    ConvergenceState::Converged | ConvergenceState::CapReached => break,
                }
            }

            let delta = coefficient_delta(&buffer.outer_snapshot, intercept, &coefficients);
            match outer.record(delta) {
                ConvergenceState::Continue => {}
                ConvergenceState::Converged => {
                    converged = true;
                    break;
                }
                ConvergenceState::CapReached => break,
            }
        }

        ExecutorOutput {
            intercept,
            coefficients,
            iterations: outer.cycles(),
            converged,
        }
    }

    /// Copy the current coefficient state (intercept first) into `snapshot`.
    fn snapshot<T: Float>(snapshot: &mut [T], intercept: T, coefficients: &[T]) {
        snapshot[0] = intercept;
        snapshot[1..].copy_from_slice(coefficients);
    }

    /// Rebuild `eta_i = b0 + sum_j b_j x_ij` from the column-major copy.
    fn recompute_eta<T: Float>(
        buffer: &mut SolverBuffer<T>,
        intercept: T,
        coefficients: &[T],
        rows: usize,
    ) {
        for e in buffer.eta.iter_mut() {
            *e = intercept;
        }
        for (j, &b) in coefficients.iter().enumerate() {
            if b.is_zero() {
                continue;
            }
            let start = j * rows;
            for i in 0..rows {
                buffer.eta[i] = buffer.eta[i] + b * buffer.columns[start + i];
            }
        }
    }
}
