//! Convergence tracking for the two-level iteration.
//!
//! ## Purpose
//!
//! This module tracks coefficient movement across cycles and signals
//! termination. The same monitor type drives both loop levels: the inner
//! coordinate-descent cycles and the outer IRLS re-linearizations, each
//! with its own independent cap.
//!
//! ## Design notes
//!
//! * **Delta**: `|b0_new - b0_old| + sum_j |b_new[j] - b_old[j]|`, computed
//!   against an immutable snapshot taken at cycle start.
//! * **Hard cap**: `max_cycles` is a safety bound, not a retry policy;
//!   reaching it reports `CapReached` and the caller returns the
//!   best-effort state flagged as non-converged.
//!
//! ## Invariants
//!
//! * `record` is called exactly once per completed cycle.
//! * `Converged` wins over `CapReached` when both hold on the same cycle.
//!
//! ## Non-goals
//!
//! * This module does not mutate coefficients or decide loop structure.

// External dependencies
use num_traits::Float;

// ============================================================================
// Convergence State
// ============================================================================

/// Outcome of recording one cycle's coefficient delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceState {
    /// Delta fell to or below the tolerance; stop this loop level.
    Converged,

    /// Keep cycling.
    Continue,

    /// The cycle cap was reached before convergence; stop this loop level.
    CapReached,
}

// ============================================================================
// Convergence Monitor
// ============================================================================

/// Tracks per-cycle coefficient movement against a tolerance and a cap.
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor<T> {
    tolerance: T,
    max_cycles: usize,
    cycles: usize,
}

impl<T: Float> ConvergenceMonitor<T> {
    /// Create a monitor with the given tolerance and cycle cap.
    pub fn new(tolerance: T, max_cycles: usize) -> Self {
        Self {
            tolerance,
            max_cycles,
            cycles: 0,
        }
    }

    /// Record one completed cycle's delta and report the loop decision.
    pub fn record(&mut self, delta: T) -> ConvergenceState {
        self.cycles += 1;
        if delta <= self.tolerance {
            ConvergenceState::Converged
        } else if self.cycles >= self.max_cycles {
            ConvergenceState::CapReached
        } else {
            ConvergenceState::Continue
        }
    }

    /// Number of cycles recorded so far.
    #[inline]
    pub fn cycles(&self) -> usize {
        self.cycles
    }
}

// ============================================================================
// Delta Computation
// ============================================================================

/// Total absolute coefficient movement since `snapshot` was taken.
///
/// `snapshot` stores the intercept at index 0 followed by the feature
/// coefficients, matching the layout written by the executor.
pub fn coefficient_delta<T: Float>(snapshot: &[T], intercept: T, coefficients: &[T]) -> T {
    let mut delta = (intercept - snapshot[0]).abs();
    for (j, &b) in coefficients.iter().enumerate() {
        delta = delta + (b - snapshot[j + 1]).abs();
    }
    delta
}
