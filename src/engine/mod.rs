//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the solve: input validation, the two-level
//! IRLS / coordinate-descent iteration, convergence tracking, and result
//! assembly.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input and parameter validation.
pub mod validator;

/// Convergence monitoring for both loop levels.
pub mod convergence;

/// The two-level solve loop.
pub mod executor;

/// Public result type.
pub mod output;
