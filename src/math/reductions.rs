//! Weighted reduction kernels for the coordinate updates.
//!
//! ## Purpose
//!
//! This module provides the per-observation reductions the coordinate pass
//! is built from: the weighted correlation `sum w * x * (z - eta)` and the
//! weighted curvature `sum w * x^2` (plus their intercept specializations
//! where `x` is a column of ones). These are the only hot loops in the
//! solver and the only place where vectorization pays off.
//!
//! ## Design notes
//!
//! * **Trait bridge**: `FloatSimd` bridges generic `Float` code to
//!   width-specialized SIMD backends, implemented for `f64` (via
//!   `wide::f64x2`) and `f32` (via `wide::f32x4`).
//! * **Deterministic**: Each backend uses a fixed lane structure and a
//!   fixed scalar tail, so sums are bit-identical across runs.
//! * **Reference path**: The `scalar` module holds plain generic loops
//!   used by tests to cross-check the SIMD backends.
//!
//! ## Invariants
//!
//! * All input slices passed to one reduction have equal length.
//! * Reductions are associative-commutative sums; lane order is fixed.
//!
//! ## Non-goals
//!
//! * Cross-coordinate parallelism: coordinate `j+1` depends on coordinate
//!   `j`'s just-updated value, so only the per-observation sums vectorize.

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatSimd Trait
// ============================================================================

/// Helper trait bridging generic `Float` types to the SIMD reduction backends.
pub trait FloatSimd: Float + 'static {
    /// Plain sum of all values.
    fn sum(values: &[Self]) -> Self;
    /// Weighted residual sum `sum_i w_i * (z_i - eta_i)`.
    fn weighted_residual_sum(w: &[Self], z: &[Self], eta: &[Self]) -> Self;
    /// Weighted residual correlation `sum_i w_i * x_i * (z_i - eta_i)`.
    fn weighted_residual_dot(w: &[Self], x: &[Self], z: &[Self], eta: &[Self]) -> Self;
    /// Weighted curvature `sum_i w_i * x_i^2`.
    fn weighted_square_dot(w: &[Self], x: &[Self]) -> Self;
}

impl FloatSimd for f64 {
    #[inline]
    fn sum(values: &[Self]) -> Self {
        wide_backend::sum_f64(values)
    }
    #[inline]
    fn weighted_residual_sum(w: &[Self], z: &[Self], eta: &[Self]) -> Self {
        wide_backend::weighted_residual_sum_f64(w, z, eta)
    }
    #[inline]
    fn weighted_residual_dot(w: &[Self], x: &[Self], z: &[Self], eta: &[Self]) -> Self {
        wide_backend::weighted_residual_dot_f64(w, x, z, eta)
    }
    #[inline]
    fn weighted_square_dot(w: &[Self], x: &[Self]) -> Self {
        wide_backend::weighted_square_dot_f64(w, x)
    }
}

impl FloatSimd for f32 {
    #[inline]
    fn sum(values: &[Self]) -> Self {
        wide_backend::sum_f32(values)
    }
    #[inline]
    fn weighted_residual_sum(w: &[Self], z: &[Self], eta: &[Self]) -> Self {
        wide_backend::weighted_residual_sum_f32(w, z, eta)
    }
    #[inline]
    fn weighted_residual_dot(w: &[Self], x: &[Self], z: &[Self], eta: &[Self]) -> Self {
        wide_backend::weighted_residual_dot_f32(w, x, z, eta)
    }
    #[inline]
    fn weighted_square_dot(w: &[Self], x: &[Self]) -> Self {
        wide_backend::weighted_square_dot_f32(w, x)
    }
}

// ============================================================================
// Scalar Reference Implementations
// ============================================================================

/// Plain generic loops, used as the reference for backend cross-checks.
pub mod scalar {
    use super::Float;

    /// Plain sum of all values.
    pub fn sum<T: Float>(values: &[T]) -> T {
        values.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Weighted residual sum `sum_i w_i * (z_i - eta_i)`.
    pub fn weighted_residual_sum<T: Float>(w: &[T], z: &[T], eta: &[T]) -> T {
        let mut acc = T::zero();
        for i in 0..w.len() {
            acc = acc + w[i] * (z[i] - eta[i]);
        }
        acc
    }

    /// Weighted residual correlation `sum_i w_i * x_i * (z_i - eta_i)`.
    pub fn weighted_residual_dot<T: Float>(w: &[T], x: &[T], z: &[T], eta: &[T]) -> T {
        let mut acc = T::zero();
        for i in 0..w.len() {
            acc = acc + w[i] * x[i] * (z[i] - eta[i]);
        }
        acc
    }

    /// Weighted curvature `sum_i w_i * x_i^2`.
    pub fn weighted_square_dot<T: Float>(w: &[T], x: &[T]) -> T {
        let mut acc = T::zero();
        for i in 0..w.len() {
            acc = acc + w[i] * x[i] * x[i];
        }
        acc
    }
}

// ============================================================================
// Wide Backend Implementation
// ============================================================================

/// SIMD reductions built on the `wide` portable vector types.
pub mod wide_backend {
    use wide::{f32x4, f64x2};

    /// Plain sum using f64x2 lanes.
    pub fn sum_f64(values: &[f64]) -> f64 {
        let n = values.len();
        let mut acc = f64x2::splat(0.0);
        let mut i = 0;
        while i + 2 <= n {
            acc += f64x2::new([values[i], values[i + 1]]);
            i += 2;
        }
        let mut total = acc.reduce_add();
        for &v in &values[i..] {
            total += v;
        }
        total
    }

    /// Weighted residual sum using f64x2 lanes.
    pub fn weighted_residual_sum_f64(w: &[f64], z: &[f64], eta: &[f64]) -> f64 {
        let n = w.len();
        let mut acc = f64x2::splat(0.0);
        let mut i = 0;
        while i + 2 <= n {
            let wv = f64x2::new([w[i], w[i + 1]]);
            let zv = f64x2::new([z[i], z[i + 1]]);
            let ev = f64x2::new([eta[i], eta[i + 1]]);
            acc += wv * (zv - ev);
            i += 2;
        }
        let mut total = acc.reduce_add();
        for k in i..n {
            total += w[k] * (z[k] - eta[k]);
        }
        total
    }

    /// Weighted residual correlation using f64x2 lanes.
    pub fn weighted_residual_dot_f64(w: &[f64], x: &[f64], z: &[f64], eta: &[f64]) -> f64 {
        let n = w.len();
        let mut acc = f64x2::splat(0.0);
        let mut i = 0;
        while i + 2 <= n {
            let wv = f64x2::new([w[i], w[i + 1]]);
            let xv = f64x2::new([x[i], x[i + 1]]);
            let zv = f64x2::new([z[i], z[i + 1]]);
            let ev = f64x2::new([eta[i], eta[i + 1]]);
            acc += wv * xv * (zv - ev);
            i += 2;
        }
        let mut total = acc.reduce_add();
        for k in i..n {
            total += w[k] * x[k] * (z[k] - eta[k]);
        }
        total
    }

    /// Weighted curvature using f64x2 lanes.
    pub fn weighted_square_dot_f64(w: &[f64], x: &[f64]) -> f64 {
        let n = w.len();
        let mut acc = f64x2::splat(0.0);
        let mut i = 0;
        while i + 2 <= n {
            let wv = f64x2::new([w[i], w[i + 1]]);
            let xv = f64x2::new([x[i], x[i + 1]]);
            acc += wv * xv * xv;
            i += 2;
        }
        let mut total = acc.reduce_add();
        for k in i..n {
            total += w[k] * x[k] * x[k];
        }
        total
    }

    /// Plain sum using f32x4 lanes.
    pub fn sum_f32(values: &[f32]) -> f32 {
        let n = values.len();
        let mut acc = f32x4::splat(0.0);
        let mut i = 0;
        while i + 4 <= n {
            acc += f32x4::new([values[i], values[i + 1], values[i + 2], values[i + 3]]);
            i += 4;
        }
        let mut total = acc.reduce_add();
        for &v in &values[i..] {
            total += v;
        }
        total
    }

    /// Weighted residual sum using f32x4 lanes.
    pub fn weighted_residual_sum_f32(w: &[f32], z: &[f32], eta: &[f32]) -> f32 {
        let n = w.len();
        let mut acc = f32x4::splat(0.0);
        let mut i = 0;
        while i + 4 <= n {
            let wv = f32x4::new([w[i], w[i + 1], w[i + 2], w[i + 3]]);
            let zv = f32x4::new([z[i], z[i + 1], z[i + 2], z[i + 3]]);
            let ev = f32x4::new([eta[i], eta[i + 1], eta[i + 2], eta[i + 3]]);
            acc += wv * (zv - ev);
            i += 4;
        }
        let mut total = acc.reduce_add();
        for k in i..n {
            total += w[k] * (z[k] - eta[k]);
        }
        total
    }

    /// Weighted residual correlation using f32x4 lanes.
    pub fn weighted_residual_dot_f32(w: &[f32], x: &[f32], z: &[f32], eta: &[f32]) -> f32 {
        let n = w.len();
        let mut acc = f32x4::splat(0.0);
        let mut i = 0;
        while i + 4 <= n {
            let wv = f32x4::new([w[i], w[i + 1], w[i + 2], w[i + 3]]);
            let xv = f32x4::new([x[i], x[i + 1], x[i + 2], x[i + 3]]);
            let zv = f32x4::new([z[i], z[i + 1], z[i + 2], z[i + 3]]);
            let ev = f32x4::new([eta[i], eta[i + 1], eta[i + 2], eta[i + 3]]);
            acc += wv * xv * (zv - ev);
            i += 4;
        }
        let mut total = acc.reduce_add();
        for k in i..n {
            total += w[k] * x[k] * (z[k] - eta[k]);
        }
        total
    }

    /// Weighted curvature using f32x4 lanes.
    pub fn weighted_square_dot_f32(w: &[f32], x: &[f32]) -> f32 {
        let n = w.len();
        let mut acc = f32x4::splat(0.0);
        let mut i = 0;
        while i + 4 <= n {
            let wv = f32x4::new([w[i], w[i + 1], w[i + 2], w[i + 3]]);
            let xv = f32x4::new([x[i], x[i + 1], x[i + 2], x[i + 3]]);
            acc += wv * xv * xv;
            i += 4;
        }
        let mut total = acc.reduce_add();
        for k in i..n {
            total += w[k] * x[k] * x[k];
        }
        total
    }
}
