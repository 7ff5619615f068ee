//! Pre-allocated workspace for the coordinate-descent solver.
//!
//! ## Purpose
//!
//! This module provides `SolverBuffer`, a workspace holding all scratch
//! space one fit needs: a column-major copy of the feature matrix, the
//! linear predictor, the IRLS working weights and working response, and the
//! coefficient snapshots used for convergence deltas. Allocating it once at
//! the start of a fit keeps the iteration loops allocation-free.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: One struct owns every buffer the executor
//!   pipeline touches, passed down explicitly.
//! * **Column-major copy**: Per-coordinate reductions scan one feature
//!   column at a time; copying the row-major input into column-major layout
//!   once makes every inner-loop scan contiguous (and SIMD-friendly).
//! * **Two snapshot generations**: The previous cycle's coefficients and
//!   the previous outer iterate both stay live while the current cycle
//!   mutates the working state, so the convergence deltas are computed
//!   against immutable copies.
//!
//! ## Invariants
//!
//! * All per-observation buffers have length `rows`.
//! * Snapshot buffers have length `cols + 1` (intercept at index 0).
//!
//! ## Non-goals
//!
//! * Thread-local caching or sharing across fits; each fit owns its buffer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::FeatureMatrix;

// ============================================================================
// Solver Buffer
// ============================================================================

/// Scratch space for one coordinate-descent fit.
pub struct SolverBuffer<T> {
    /// Column-major copy of the feature matrix (`cols * rows` values).
    pub columns: Vec<T>,
    /// Linear predictor `eta_i = b0 + sum_j b_j * x_ij` (length `rows`).
    pub eta: Vec<T>,
    /// IRLS working weights `w_i` (length `rows`).
    pub weights: Vec<T>,
    /// IRLS working response `z_i` (length `rows`).
    pub response: Vec<T>,
    /// Coefficients at the start of the current cycle (intercept at `[0]`).
    pub cycle_snapshot: Vec<T>,
    /// Coefficients at the start of the current outer iteration.
    pub outer_snapshot: Vec<T>,
    rows: usize,
}

impl<T: Float> SolverBuffer<T> {
    /// Allocate a workspace for an n×p problem.
    pub fn new(rows: usize, cols: usize) -> Self {
        let zero = T::zero();
        Self {
            columns: vec![zero; rows * cols],
            eta: vec![zero; rows],
            weights: vec![zero; rows],
            response: vec![zero; rows],
            cycle_snapshot: vec![zero; cols + 1],
            outer_snapshot: vec![zero; cols + 1],
            rows,
        }
    }

    /// Copy the row-major feature matrix into the column-major scratch.
    pub fn load_columns(&mut self, x: &FeatureMatrix<'_, T>) {
        for j in 0..x.cols() {
            let dst = &mut self.columns[j * self.rows..(j + 1) * self.rows];
            for (slot, value) in dst.iter_mut().zip(x.column(j)) {
                *slot = value;
            }
        }
    }

    /// Contiguous view of feature column `j`.
    #[inline]
    pub fn column(&self, j: usize) -> &[T] {
        &self.columns[j * self.rows..(j + 1) * self.rows]
    }
}
