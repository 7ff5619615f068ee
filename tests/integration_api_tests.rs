//! End-to-end tests through the public API.
//!
//! These tests exercise the builder, the fit entry point, and the solved
//! coefficients on a fixed two-feature dataset:
//! - Optimality of the fitted coefficients (score equations, perturbation)
//! - Shrinkage behavior across the lambda path
//! - Determinism, capping, error reporting, and diagnostics

use approx::assert_relative_eq;

use sparse_logit_rs::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

/// A fixed 20-observation, 2-feature dataset.
///
/// The classes overlap (labels 1 at i = 4 and i = 6 sit inside the
/// low-feature region), so the unpenalized maximum-likelihood fit is
/// finite. 12 of 20 labels are 1.
fn make_dataset() -> (Vec<f64>, Vec<f64>) {
    let mut x = Vec::with_capacity(40);
    let mut y = Vec::with_capacity(20);
    for i in 0..20 {
        let x1 = -1.9 + 0.2 * i as f64;
        let x2 = if i % 2 == 0 { 0.5 } else { -0.5 };
        x.push(x1);
        x.push(x2);
        let label = if i >= 10 || i == 4 || i == 6 { 1.0 } else { 0.0 };
        y.push(label);
    }
    (x, y)
}

/// Stable ln(1 + exp(t)).
fn log1p_exp(t: f64) -> f64 {
    t.max(0.0) + (-t.abs()).exp().ln_1p()
}

/// Penalized negative log-likelihood at given coefficients.
fn objective(x: &[f64], y: &[f64], b0: f64, b: &[f64], lambda: f64) -> f64 {
    let p = b.len();
    let mut nll = 0.0;
    for (i, &yi) in y.iter().enumerate() {
        let mut eta = b0;
        for j in 0..p {
            eta += b[j] * x[i * p + j];
        }
        nll += log1p_exp(eta) - yi * eta;
    }
    nll + lambda * b.iter().map(|v| v.abs()).sum::<f64>()
}

// ============================================================================
// Optimality
// ============================================================================

/// At lambda = 0 the fitted coefficients satisfy the maximum-likelihood
/// score equations: the residuals are orthogonal to the intercept column
/// and to every feature column.
#[test]
fn test_unpenalized_fit_satisfies_score_equations() {
    let (x, y) = make_dataset();

    let result = SparseLogit::new()
        .features(2)
        .lambda(0.0)
        .tolerance(1e-9)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(result.converged);

    let mut score0 = 0.0;
    let mut score = [0.0_f64; 2];
    for (i, &yi) in y.iter().enumerate() {
        let eta = result.intercept
            + result.coefficients[0] * x[2 * i]
            + result.coefficients[1] * x[2 * i + 1];
        let p = 1.0 / (1.0 + (-eta).exp());
        let r = yi - p;
        score0 += r;
        score[0] += r * x[2 * i];
        score[1] += r * x[2 * i + 1];
    }

    assert!(score0.abs() < 1e-4, "intercept score: {}", score0);
    assert!(score[0].abs() < 1e-4, "feature 0 score: {}", score[0]);
    assert!(score[1].abs() < 1e-4, "feature 1 score: {}", score[1]);
}

/// The penalized fit is a local minimum: perturbing any coordinate does
/// not decrease the penalized objective.
#[test]
fn test_penalized_fit_is_local_minimum() {
    let (x, y) = make_dataset();
    let lambda = 0.25;

    let result = SparseLogit::new()
        .features(2)
        .lambda(lambda)
        .tolerance(1e-9)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(result.converged);

    let at_fit = objective(&x, &y, result.intercept, &result.coefficients, lambda);

    let step = 1e-6;
    for &sign in &[1.0, -1.0] {
        let perturbed = objective(
            &x,
            &y,
            result.intercept + sign * step,
            &result.coefficients,
            lambda,
        );
        assert!(at_fit <= perturbed + 1e-10);

        for j in 0..2 {
            let mut b = result.coefficients.clone();
            b[j] += sign * step;
            let perturbed = objective(&x, &y, result.intercept, &b, lambda);
            assert!(
                at_fit <= perturbed + 1e-10,
                "coordinate {} moved {} below fit",
                j,
                sign * step
            );
        }
    }
}

// ============================================================================
// Shrinkage
// ============================================================================

/// The coefficient L1 norm is non-increasing along the lambda path.
#[test]
fn test_l1_norm_shrinks_with_lambda() {
    let (x, y) = make_dataset();

    let mut previous = f64::INFINITY;
    for &lambda in &[0.0, 0.1, 1.0, 10.0] {
        let result = SparseLogit::new()
            .features(2)
            .lambda(lambda)
            .tolerance(1e-9)
            .build()
            .unwrap()
            .fit(&x, &y)
            .unwrap();

        let norm: f64 = result.coefficients.iter().map(|b| b.abs()).sum();
        assert!(
            norm <= previous + 1e-6,
            "L1 norm grew at lambda = {}: {} > {}",
            lambda,
            norm,
            previous
        );
        previous = norm;
    }
}

/// A lambda far above the data scale zeroes every feature coefficient
/// exactly, leaving the intercept at the log-odds of the base rate.
#[test]
fn test_large_lambda_gives_intercept_only_model() {
    let (x, y) = make_dataset();

    let result = SparseLogit::new()
        .features(2)
        .lambda(100.0)
        .tolerance(1e-9)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(result.converged);
    assert_eq!(result.coefficients[0], 0.0);
    assert_eq!(result.coefficients[1], 0.0);
    // ln(0.6 / 0.4), the base-rate log-odds for 12 of 20 positives.
    assert_relative_eq!(result.intercept, 0.4054651081, epsilon = 1e-6);
}

// ============================================================================
// Determinism and Capping
// ============================================================================

/// Identical inputs give bit-identical outputs.
#[test]
fn test_fit_is_deterministic() {
    let (x, y) = make_dataset();

    let model = SparseLogit::new()
        .features(2)
        .lambda(0.1)
        .build()
        .unwrap();

    let a = model.fit(&x, &y).unwrap();
    let b = model.fit(&x, &y).unwrap();

    assert_eq!(a.intercept.to_bits(), b.intercept.to_bits());
    for j in 0..2 {
        assert_eq!(a.coefficients[j].to_bits(), b.coefficients[j].to_bits());
    }
    assert_eq!(a.iterations, b.iterations);
}

/// Hitting the iteration cap is reported through the flag, not an error,
/// and the capped coefficients are finite.
#[test]
fn test_iteration_cap_reported_not_errored() {
    let (x, y) = make_dataset();

    let result = SparseLogit::new()
        .features(2)
        .tolerance(1e-12)
        .max_iterations(1)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(!result.converged);
    assert_eq!(result.iterations, 1);
    assert!(result.intercept.is_finite());
    assert!(result.coefficients.iter().all(|b| b.is_finite()));
}

// ============================================================================
// Errors
// ============================================================================

/// A flattened array of the wrong length is rejected at fit time.
#[test]
fn test_fit_rejects_mismatched_lengths() {
    let x = vec![1.0_f64, 2.0, 3.0];
    let y = vec![0.0, 1.0];

    let model = SparseLogit::new().features(2).build().unwrap();
    let err = model.fit(&x, &y).unwrap_err();
    assert_eq!(
        err,
        SparseLogitError::MismatchedInputs { x_len: 3, y_len: 2 }
    );
}

/// A negative lambda is rejected at build time.
#[test]
fn test_build_rejects_negative_lambda() {
    let result = SparseLogit::<f64>::new().lambda(-0.5).build();
    assert!(matches!(result, Err(SparseLogitError::InvalidLambda(_))));
}

// ============================================================================
// Diagnostics and Display
// ============================================================================

/// Requested diagnostics are present and internally consistent.
#[test]
fn test_diagnostics() {
    let (x, y) = make_dataset();

    let result = SparseLogit::new()
        .features(2)
        .lambda(0.1)
        .return_diagnostics()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let diag = result.diagnostics.as_ref().unwrap();

    assert!(diag.log_likelihood < 0.0);
    assert_relative_eq!(diag.deviance, -2.0 * diag.log_likelihood, epsilon = 1e-12);
    // A model with informative features beats the base-rate model.
    assert!(diag.deviance < diag.null_deviance);
    assert_relative_eq!(
        diag.penalized_objective,
        -diag.log_likelihood + 0.1 * result.coefficients.iter().map(|b| b.abs()).sum::<f64>(),
        epsilon = 1e-12
    );
    assert!(diag.nonzero <= 2);
}

/// Diagnostics are omitted unless requested.
#[test]
fn test_diagnostics_opt_in() {
    let (x, y) = make_dataset();
    let result = SparseLogit::new()
        .features(2)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    assert!(result.diagnostics.is_none());
}

/// The Display output carries the summary and coefficient blocks.
#[test]
fn test_result_display() {
    let (x, y) = make_dataset();
    let result = SparseLogit::new()
        .features(2)
        .lambda(0.1)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    let text = result.to_string();
    assert!(text.contains("Summary:"));
    assert!(text.contains("Coefficients:"));
    assert!(text.contains("(intercept)"));
}

// ============================================================================
// f32 Path
// ============================================================================

/// The solver works end to end in single precision.
#[test]
fn test_f32_fit() {
    let (x, y) = make_dataset();
    let x: Vec<f32> = x.iter().map(|&v| v as f32).collect();
    let y: Vec<f32> = y.iter().map(|&v| v as f32).collect();

    let result = SparseLogit::new()
        .features(2)
        .lambda(0.1_f32)
        .tolerance(1e-4_f32)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert!(result.converged);
    assert!(result.intercept.is_finite());
    assert!(result.coefficients.iter().all(|b| b.is_finite()));
}
