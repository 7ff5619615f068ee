//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the two algorithmic halves of the solver:
//! - The IRLS linearization (working weights and working response)
//! - The cyclic coordinate-descent pass over the weighted-lasso subproblem
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// IRLS working weight/response computation.
pub mod quadratic;

/// Cyclic Gauss–Seidel coordinate updates.
pub mod coordinate;
