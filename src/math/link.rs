//! Logistic link functions.
//!
//! ## Purpose
//!
//! This module provides the scalar link functions the IRLS linearization
//! and the diagnostics are built from: the sigmoid (inverse logit), its
//! inverse, and a numerically stable `log(1 + exp(t))`.
//!
//! ## Design notes
//!
//! * **Stability**: `sigmoid` branches on the sign of the argument so the
//!   exponential never overflows; `log1p_exp` uses the standard
//!   `max(t, 0) + ln(1 + exp(-|t|))` decomposition.
//! * **Pure**: No state; generic over `Float`.
//!
//! ## Non-goals
//!
//! * This module does not clamp probabilities (the IRLS linearization
//!   applies its own clamp before forming working weights).

// External dependencies
use num_traits::Float;

// ============================================================================
// Link Functions
// ============================================================================

/// Inverse logit `1 / (1 + exp(-t))`, overflow-safe for any finite `t`.
#[inline]
pub fn sigmoid<T: Float>(t: T) -> T {
    if t >= T::zero() {
        T::one() / (T::one() + (-t).exp())
    } else {
        let e = t.exp();
        e / (T::one() + e)
    }
}

/// Logit (log-odds) of a probability `p` in (0, 1).
#[inline]
pub fn log_odds<T: Float>(p: T) -> T {
    (p / (T::one() - p)).ln()
}

/// Numerically stable `ln(1 + exp(t))`.
#[inline]
pub fn log1p_exp<T: Float>(t: T) -> T {
    t.max(T::zero()) + (-t.abs()).exp().ln_1p()
}
