//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures used throughout the
//! solver:
//! - Typed errors
//! - The borrowed dense feature-matrix view
//! - The pre-allocated solver workspace
//!
//! These carry no algorithmic logic of their own.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Typed error enum for configuration and input failures.
pub mod errors;

/// Borrowed row-major feature-matrix view.
pub mod matrix;

/// Pre-allocated solver workspace.
pub mod buffer;
