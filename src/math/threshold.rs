//! Soft-threshold shrinkage operator.
//!
//! ## Purpose
//!
//! This module provides the proximal operator for the L1 penalty. Every
//! coordinate update applies it to the weighted correlation before dividing
//! by the curvature term.
//!
//! ## Design notes
//!
//! * **Formula**: `sign(z) * max(|z| - lambda, 0)`.
//! * **Pure**: No state, no failure modes; generic over `Float`.
//!
//! ## Invariants
//!
//! * `soft_threshold(z, 0) == z`.
//! * `soft_threshold(z, lambda) == 0` whenever `|z| <= lambda`.
//! * Odd symmetry: `soft_threshold(-z, lambda) == -soft_threshold(z, lambda)`.
//!
//! ## Non-goals
//!
//! * This module does not apply per-coordinate penalty factors (the
//!   coordinate pass decides what `lambda` each coordinate sees).

// External dependencies
use num_traits::Float;

// ============================================================================
// Soft Threshold
// ============================================================================

/// Shrink `z` toward zero by `lambda`, clamping the dead zone to exactly 0.
#[inline]
pub fn soft_threshold<T: Float>(z: T, lambda: T) -> T {
    let magnitude = z.abs() - lambda;
    if magnitude <= T::zero() {
        T::zero()
    } else if z > T::zero() {
        magnitude
    } else {
        -magnitude
    }
}
