#![cfg(feature = "dev")]
//! Tests for the logistic link functions.

use approx::assert_relative_eq;

use sparse_logit_rs::internals::math::link::{log1p_exp, log_odds, sigmoid};

// ============================================================================
// Sigmoid
// ============================================================================

/// Known sigmoid values.
#[test]
fn test_sigmoid_values() {
    assert_relative_eq!(sigmoid(0.0_f64), 0.5, epsilon = 1e-15);
    assert_relative_eq!(sigmoid(1.0_f64), 1.0 / (1.0 + (-1.0_f64).exp()), epsilon = 1e-15);
    assert_relative_eq!(sigmoid(-1.0_f64), 1.0 - sigmoid(1.0_f64), epsilon = 1e-15);
}

/// No overflow for extreme arguments; output stays in [0, 1].
#[test]
fn test_sigmoid_extreme_arguments() {
    assert_relative_eq!(sigmoid(750.0_f64), 1.0, epsilon = 1e-15);
    assert_relative_eq!(sigmoid(-750.0_f64), 0.0, epsilon = 1e-15);
    assert!(sigmoid(750.0_f64).is_finite());
    assert!(sigmoid(-750.0_f64).is_finite());
}

/// Sigmoid and log-odds are inverses on the open interval.
#[test]
fn test_sigmoid_log_odds_inverse() {
    for &p in &[0.01, 0.2, 0.5, 0.8, 0.99_f64] {
        assert_relative_eq!(sigmoid(log_odds(p)), p, epsilon = 1e-12);
    }
}

// ============================================================================
// log1p_exp
// ============================================================================

/// Matches the direct formula in the well-conditioned range.
#[test]
fn test_log1p_exp_matches_direct() {
    for &t in &[-5.0, -1.0, 0.0, 1.0, 5.0_f64] {
        assert_relative_eq!(log1p_exp(t), (1.0 + t.exp()).ln(), epsilon = 1e-12);
    }
}

/// Stays finite where the direct formula would overflow.
#[test]
fn test_log1p_exp_no_overflow() {
    let t = 800.0_f64;
    assert_relative_eq!(log1p_exp(t), t, epsilon = 1e-12);
    assert_relative_eq!(log1p_exp(-t), 0.0, epsilon = 1e-12);
}
