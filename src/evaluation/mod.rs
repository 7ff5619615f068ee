//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit evaluation: log-likelihood, deviance, the
//! penalized objective, and sparsity counts. It never participates in the
//! optimization itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit-quality diagnostics.
pub mod diagnostics;
