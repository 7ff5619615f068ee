#![cfg(feature = "dev")]
//! Tests for the weighted reduction kernels.
//!
//! The SIMD backends are cross-checked against the scalar reference loops
//! on lengths that exercise both the vector body and the scalar tail.

use approx::assert_relative_eq;

use sparse_logit_rs::internals::math::reductions::{scalar, wide_backend, FloatSimd};

/// Deterministic pseudo-random test vectors.
fn make_data(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut w = Vec::with_capacity(n);
    let mut x = Vec::with_capacity(n);
    let mut z = Vec::with_capacity(n);
    let mut eta = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64;
        w.push(0.05 + 0.2 * ((t * 0.7).sin().abs()));
        x.push((t * 1.3).cos() * 2.0);
        z.push((t * 0.4).sin() * 3.0 - 0.5);
        eta.push((t * 0.9).cos() * 0.8);
    }
    (w, x, z, eta)
}

// ============================================================================
// SIMD vs Scalar Cross-Checks
// ============================================================================

/// f64 backends agree with the scalar reference, including odd tails.
#[test]
fn test_f64_backend_matches_scalar() {
    for n in [1, 2, 3, 4, 5, 7, 8, 16, 31, 64] {
        let (w, x, z, eta) = make_data(n);

        assert_relative_eq!(
            wide_backend::sum_f64(&w),
            scalar::sum(&w),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            wide_backend::weighted_residual_sum_f64(&w, &z, &eta),
            scalar::weighted_residual_sum(&w, &z, &eta),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            wide_backend::weighted_residual_dot_f64(&w, &x, &z, &eta),
            scalar::weighted_residual_dot(&w, &x, &z, &eta),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            wide_backend::weighted_square_dot_f64(&w, &x),
            scalar::weighted_square_dot(&w, &x),
            epsilon = 1e-12
        );
    }
}

/// f32 backends agree with the scalar reference within f32 tolerance.
#[test]
fn test_f32_backend_matches_scalar() {
    for n in [1, 3, 4, 5, 9, 17, 32] {
        let (w, x, z, eta) = make_data(n);
        let w: Vec<f32> = w.iter().map(|&v| v as f32).collect();
        let x: Vec<f32> = x.iter().map(|&v| v as f32).collect();
        let z: Vec<f32> = z.iter().map(|&v| v as f32).collect();
        let eta: Vec<f32> = eta.iter().map(|&v| v as f32).collect();

        assert_relative_eq!(
            wide_backend::sum_f32(&w),
            scalar::sum(&w),
            epsilon = 1e-4
        );
        assert_relative_eq!(
            wide_backend::weighted_residual_dot_f32(&w, &x, &z, &eta),
            scalar::weighted_residual_dot(&w, &x, &z, &eta),
            epsilon = 1e-3
        );
        assert_relative_eq!(
            wide_backend::weighted_square_dot_f32(&w, &x),
            scalar::weighted_square_dot(&w, &x),
            epsilon = 1e-3
        );
    }
}

// ============================================================================
// Trait Dispatch and Determinism
// ============================================================================

/// The trait methods dispatch to the backends.
#[test]
fn test_trait_dispatch() {
    let (w, x, z, eta) = make_data(13);
    assert_eq!(f64::sum(&w), wide_backend::sum_f64(&w));
    assert_eq!(
        f64::weighted_residual_dot(&w, &x, &z, &eta),
        wide_backend::weighted_residual_dot_f64(&w, &x, &z, &eta)
    );
    assert_eq!(
        f64::weighted_square_dot(&w, &x),
        wide_backend::weighted_square_dot_f64(&w, &x)
    );
}

/// Reductions are bit-identical across repeated calls.
#[test]
fn test_reductions_deterministic() {
    let (w, x, z, eta) = make_data(27);
    let a = f64::weighted_residual_dot(&w, &x, &z, &eta);
    let b = f64::weighted_residual_dot(&w, &x, &z, &eta);
    assert_eq!(a.to_bits(), b.to_bits());
}

/// Empty inputs reduce to zero.
#[test]
fn test_empty_inputs() {
    let empty: [f64; 0] = [];
    assert_eq!(f64::sum(&empty), 0.0);
    assert_eq!(f64::weighted_square_dot(&empty, &empty), 0.0);
}
