//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! solver:
//! - The soft-threshold proximal operator for the L1 penalty
//! - Logistic link functions
//! - Weighted reduction kernels (scalar reference + SIMD backends)
//!
//! These are reusable mathematical building blocks with no algorithm-specific
//! logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Soft-threshold shrinkage operator.
pub mod threshold;

/// Logistic link functions.
pub mod link;

/// Weighted reduction kernels with SIMD backends.
pub mod reductions;
