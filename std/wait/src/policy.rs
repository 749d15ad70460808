//! Chunking policy for long waits.
//!
//! A single tool call may block for at most the configured ceiling. Longer
//! requests are served one ceiling-sized chunk at a time and the caller is
//! told how much remains.

/// Outcome of applying the ceiling to a requested duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaitDecision {
    /// Seconds to wait during this call.
    pub actual_wait: f64,
    /// Seconds still owed after this call. Zero when final.
    pub remaining: f64,
    /// Whether this call completes the request.
    pub is_final: bool,
}

/// Decide how much of `requested` fits under `ceiling`.
///
/// `requested` is not validated here; negative input is rejected by the
/// tool before the policy is consulted.
pub fn decide(requested: f64, ceiling: f64) -> WaitDecision {
    if requested > ceiling {
        WaitDecision {
            actual_wait: ceiling,
            remaining: requested - ceiling,
            is_final: false,
        }
    } else {
        WaitDecision {
            actual_wait: requested,
            remaining: 0.0,
            is_final: true,
        }
    }
}
