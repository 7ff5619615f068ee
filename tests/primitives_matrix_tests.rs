#![cfg(feature = "dev")]
//! Tests for the feature-matrix view and the solver workspace.

use sparse_logit_rs::internals::primitives::buffer::SolverBuffer;
use sparse_logit_rs::internals::primitives::matrix::FeatureMatrix;

// ============================================================================
// Matrix View
// ============================================================================

/// Row, column, and element access on a 2x3 matrix.
#[test]
fn test_matrix_access() {
    // 2 rows x 3 cols, row-major.
    let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let m = FeatureMatrix::new(&data, 2, 3);

    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);

    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);

    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(1, 2), 6.0);

    let col1: Vec<f64> = m.column(1).collect();
    assert_eq!(col1, vec![2.0, 5.0]);
    let col2: Vec<f64> = m.column(2).collect();
    assert_eq!(col2, vec![3.0, 6.0]);
}

/// A single-column matrix round-trips rows and the one column.
#[test]
fn test_matrix_single_column() {
    let data = [7.0_f64, 8.0, 9.0];
    let m = FeatureMatrix::new(&data, 3, 1);
    assert_eq!(m.row(1), &[8.0]);
    let col: Vec<f64> = m.column(0).collect();
    assert_eq!(col, vec![7.0, 8.0, 9.0]);
}

// ============================================================================
// Solver Workspace
// ============================================================================

/// Buffers are sized for an n×p problem with intercept-bearing snapshots.
#[test]
fn test_buffer_shapes() {
    let buffer: SolverBuffer<f64> = SolverBuffer::new(5, 3);
    assert_eq!(buffer.columns.len(), 15);
    assert_eq!(buffer.eta.len(), 5);
    assert_eq!(buffer.weights.len(), 5);
    assert_eq!(buffer.response.len(), 5);
    assert_eq!(buffer.cycle_snapshot.len(), 4);
    assert_eq!(buffer.outer_snapshot.len(), 4);
}

/// Loading transposes the row-major input into contiguous columns.
#[test]
fn test_buffer_load_columns() {
    let data = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
    let m = FeatureMatrix::new(&data, 3, 2);

    let mut buffer = SolverBuffer::new(3, 2);
    buffer.load_columns(&m);

    assert_eq!(buffer.column(0), &[1.0, 3.0, 5.0]);
    assert_eq!(buffer.column(1), &[2.0, 4.0, 6.0]);
}
