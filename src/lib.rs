//! # Sparse logistic regression for Rust
//!
//! An L1-penalized (lasso) logistic regression solver using iteratively
//! reweighted least squares (IRLS) with cyclic coordinate descent — the
//! scheme popularized by fast lasso-logistic solvers such as glmnet.
//!
//! ## What does it do?
//!
//! Given a dense feature matrix and a binary label vector, the solver fits
//! an intercept and one coefficient per feature by minimizing the penalized
//! negative log-likelihood
//!
//! ```text
//! - sum_i [ y_i * eta_i - ln(1 + exp(eta_i)) ] + lambda * sum_j |b_j|
//! ```
//!
//! where `eta_i = b0 + sum_j b_j * x_ij`. The L1 penalty drives individual
//! coefficients to exactly zero, producing sparse, interpretable models;
//! the intercept is never penalized.
//!
//! **How the solve works:**
//!
//! 1. Linearize the log-likelihood around the current fit (IRLS): each
//!    observation gets a working weight `p(1-p)` and a working response.
//! 2. Solve the resulting weighted-lasso subproblem by cyclic coordinate
//!    descent: each coordinate has a closed-form soft-threshold update.
//! 3. Re-linearize and repeat until the coefficients stop moving.
//!
//! Both loop levels share one tolerance and are independently capped by
//! `max_iterations`; hitting a cap returns the best-effort coefficients
//! flagged as non-converged rather than an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparse_logit_rs::prelude::*;
//!
//! // One feature per observation; labels are 0/1.
//! let x = vec![-2.0, -1.4, -1.0, -0.4, 0.3, 0.9, 1.6, 2.2];
//! let y = vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0];
//!
//! let model = SparseLogit::new()
//!     .lambda(0.05)       // L1 penalty strength
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//!
//! println!("{}", result);
//! # Result::<(), SparseLogitError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use sparse_logit_rs::prelude::*;
//!
//! // Two features per observation, row-major flattened.
//! let x = vec![
//!     0.5, 1.2, //
//!     -0.3, 0.8, //
//!     1.9, -0.4, //
//!     -1.1, -0.9, //
//!     0.2, 0.1, //
//!     -0.7, 1.5, //
//! ];
//! let y = vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
//!
//! let model = SparseLogit::new()
//!     .features(2)             // columns per row
//!     .lambda(0.1)             // L1 penalty strength
//!     .tolerance(1e-8)         // convergence tolerance
//!     .max_iterations(10_000)  // cap at both loop levels
//!     .return_diagnostics()    // log-likelihood, deviance, sparsity
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//!
//! assert!(result.converged);
//! assert_eq!(result.coefficients.len(), 2);
//! # Result::<(), SparseLogitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `fit` returns `Result<SparseLogitResult<T>, SparseLogitError>`.
//!
//! - **`Ok(SparseLogitResult<T>)`**: intercept, coefficients, convergence
//!   flag, iteration count, and optional diagnostics.
//! - **`Err(SparseLogitError)`**: a configuration or data failure
//!   (mismatched lengths, non-binary label, negative lambda, ...).
//!
//! Reaching the iteration cap is NOT an error: the result carries the
//! best-effort coefficients with `converged == false` so callers can
//! decide what to do with a capped fit.
//!
//! ```rust
//! use sparse_logit_rs::prelude::*;
//! # let x = vec![-2.0, -1.0, 0.5, 1.0, 1.5, 2.5];
//! # let y = vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
//!
//! let model = SparseLogit::new().max_iterations(5).build()?;
//!
//! match model.fit(&x, &y) {
//!     Ok(result) if result.converged => println!("{}", result),
//!     Ok(result) => eprintln!("capped after {} iterations", result.iterations),
//!     Err(e) => eprintln!("fitting failed: {}", e),
//! }
//! # Result::<(), SparseLogitError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features and
//! enable `libm` for the float intrinsics:
//!
//! ```toml
//! [dependencies]
//! sparse-logit-rs = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! Use `f32` and small iteration caps to keep the footprint down.
//!
//! ## Parameters
//!
//! | Parameter              | Default   | Range       | Description                                |
//! |------------------------|-----------|-------------|--------------------------------------------|
//! | **lambda**             | 0         | `[0, ∞)`    | L1 penalty strength (0 = plain logistic)   |
//! | **tolerance**          | 1e-7      | `(0, ∞)`    | Per-cycle coefficient-delta tolerance      |
//! | **max_iterations**     | 100_000   | `[1, ∞)`    | Cap applied at both loop levels            |
//! | **features**           | 1         | `[1, ∞)`    | Columns per row in the flattened input     |
//! | **return_diagnostics** | false     | true/false  | Compute log-likelihood/deviance/sparsity   |
//!
//! ## Determinism
//!
//! The solve is single-threaded and free of randomness: identical inputs
//! produce bit-identical outputs. The SIMD reductions use a fixed lane
//! structure, so vectorization does not perturb results between runs.
//!
//! ## References
//!
//! - Friedman, J., Hastie, T. & Tibshirani, R. (2010). "Regularization
//!   Paths for Generalized Linear Models via Coordinate Descent"
//! - Hastie, T., Tibshirani, R. & Wainwright, M. (2015). "Statistical
//!   Learning with Sparsity: The Lasso and Generalizations"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the typed error enum, the borrowed feature-matrix view, and the
// pre-allocated solver workspace.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the soft-threshold operator, logistic link functions, and the
// weighted reduction kernels (scalar + SIMD).
mod math;

// Layer 3: Algorithms - core solver algorithms.
//
// Contains the IRLS linearization (working weights/response) and the
// cyclic Gauss–Seidel coordinate-descent pass.
mod algorithms;

// Layer 4: Evaluation - post-fit statistics.
//
// Contains fit diagnostics (log-likelihood, deviance, sparsity counts).
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains input validation, convergence monitoring, the two-level solve
// loop, and the public result type.
mod engine;

// High-level fluent API.
//
// Provides the `SparseLogit` builder for configuring and running fits.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use sparse_logit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        SparseLogitBuilder as SparseLogit, SparseLogitError, SparseLogitModel, SparseLogitResult,
    };
    pub use crate::evaluation::diagnostics::Diagnostics;
}

pub use crate::api::{SparseLogitBuilder, SparseLogitError, SparseLogitModel, SparseLogitResult};

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
