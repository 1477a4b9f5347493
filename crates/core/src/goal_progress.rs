//! Progress arithmetic for career goals.
//!
//! A goal's progress is the share of its estimated duration already spent,
//! expressed as a percentage: `elapsed_days / estimated_days * 100`. Two
//! advance policies exist and are both part of the public API contract:
//!
//! - [`AdvancePolicy::Strict`] refuses to move a goal that is already
//!   complete and pins progress to exactly 100 on the final step.
//! - [`AdvancePolicy::Lenient`] always moves the goal forward, so elapsed
//!   days can overshoot the estimate and progress can exceed 100. The only
//!   stop is the `i32` ceiling of the day counter.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Progress value of a completed goal.
pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Progress value assigned to a newly created goal when none is supplied.
pub const DEFAULT_PROGRESS: f64 = 0.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How an advance request treats goals at or past their estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvancePolicy {
    Strict,
    Lenient,
}

/// The new counter and progress values produced by one advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStep {
    pub elapsed_days: i32,
    pub progress: f64,
}

/// Reasons an advance cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdvanceRejection {
    /// Strict policy only: the goal already reached its estimate.
    #[error("goal already completed")]
    AlreadyComplete,

    /// Progress has no finite value when the estimate is zero days.
    #[error("estimated_days is zero, progress is undefined")]
    ZeroEstimate,

    /// Lenient policy only: `elapsed_days` is already `i32::MAX`.
    #[error("elapsed_days cannot grow past {}", i32::MAX)]
    ElapsedOverflow,
}

// ---------------------------------------------------------------------------
// Functions
// ---------------------------------------------------------------------------

/// Percentage of `estimated_days` covered by `elapsed_days`.
///
/// Returns `None` when `estimated_days` is zero. Negative estimates are not
/// rejected and yield whatever the division gives.
pub fn progress_percent(elapsed_days: i32, estimated_days: i32) -> Option<f64> {
    if estimated_days == 0 {
        return None;
    }
    Some(f64::from(elapsed_days) / f64::from(estimated_days) * 100.0)
}

/// A goal is complete once its elapsed days reach the estimate.
pub fn is_complete(elapsed_days: i32, estimated_days: i32) -> bool {
    elapsed_days >= estimated_days
}

/// Compute the result of advancing a goal by one day under `policy`.
pub fn advance(
    elapsed_days: i32,
    estimated_days: i32,
    policy: AdvancePolicy,
) -> Result<ProgressStep, AdvanceRejection> {
    if policy == AdvancePolicy::Strict && is_complete(elapsed_days, estimated_days) {
        return Err(AdvanceRejection::AlreadyComplete);
    }

    let elapsed_days = elapsed_days
        .checked_add(1)
        .ok_or(AdvanceRejection::ElapsedOverflow)?;
    let mut progress =
        progress_percent(elapsed_days, estimated_days).ok_or(AdvanceRejection::ZeroEstimate)?;

    // The step that reaches the estimate reports exactly 100.
    if policy == AdvancePolicy::Strict && is_complete(elapsed_days, estimated_days) {
        progress = PROGRESS_COMPLETE;
    }

    Ok(ProgressStep {
        elapsed_days,
        progress,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
