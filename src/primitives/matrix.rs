//! Borrowed dense feature-matrix view.
//!
//! ## Purpose
//!
//! This module provides `FeatureMatrix`, a lightweight view over a
//! caller-owned, row-major flattened slice of feature values. The solver
//! borrows the data for the lifetime of one fit and never copies or mutates
//! it (the engine keeps its own column-major scratch copy for the hot
//! per-coordinate reductions).
//!
//! ## Design notes
//!
//! * **Zero-copy**: Wraps the caller's slice; construction is O(1).
//! * **Row-major semantics**: `row(i)` is a contiguous subslice;
//!   `column(j)` is a strided iterator.
//! * **Invariant-carrying**: `data.len() == rows * cols` is established by
//!   the validator before construction and debug-asserted here.
//!
//! ## Non-goals
//!
//! * This module does not validate values (see `engine::validator`).
//! * This module does not support sparse storage.

// External dependencies
use num_traits::Float;

// ============================================================================
// Feature Matrix
// ============================================================================

/// A borrowed n×p dense matrix view with row-major storage.
#[derive(Debug, Clone, Copy)]
pub struct FeatureMatrix<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T: Float> FeatureMatrix<'a, T> {
    /// Wrap a row-major flattened slice as an n×p matrix view.
    ///
    /// The caller must guarantee `data.len() == rows * cols`; the public
    /// `fit` path establishes this via the validator.
    #[inline]
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { data, rows, cols }
    }

    /// Number of observations (rows).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of features (columns).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Contiguous view of observation `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Single element at row `i`, column `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.cols + j]
    }

    /// Strided iterator over column `j` (length `rows`).
    #[inline]
    pub fn column(&self, j: usize) -> impl Iterator<Item = T> + 'a {
        self.data[j..].iter().step_by(self.cols).copied()
    }
}
