//! # Errors surfaced by worker runs.
//!
//! A single enum, [`WorkError`], covers the three cause kinds a caller can
//! meet:
//!
//! - **configuration**: [`MissingTarget`](WorkError::MissingTarget),
//!   [`InvalidRps`](WorkError::InvalidRps),
//!   [`InvalidOvertime`](WorkError::InvalidOvertime) — rejected before any
//!   side effect;
//! - **concurrency**: [`Busy`](WorkError::Busy) — a second run was requested
//!   while one is in progress;
//! - **context**: [`DeadlineElapsed`](WorkError::DeadlineElapsed),
//!   [`Cancelled`](WorkError::Cancelled) — how a run ended. These are not
//!   failures; [`is_cancellation`](WorkError::is_cancellation) lets callers
//!   fold them into success.
//!
//! Variants are the stable identity (classify by matching); the display
//! string carries a short structured reason (`identity: reason`).

use thiserror::Error;

/// Everything [`Worker::work`](crate::Worker::work) and the fleet helpers can
/// return.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkError {
    /// The worker was hired without a target.
    #[error("target is missing: {reason}")]
    MissingTarget {
        /// Short explanation for display.
        reason: &'static str,
    },

    /// The requested rate is non-positive, or so large that the tick period
    /// truncates below one nanosecond.
    #[error("invalid rps: {reason}")]
    InvalidRps {
        /// Short explanation for display.
        reason: &'static str,
    },

    /// The configured concurrency ceiling is negative.
    #[error("invalid overtime: {reason}")]
    InvalidOvertime {
        /// Short explanation for display.
        reason: &'static str,
    },

    /// Another run on the same worker is already in progress.
    #[error("worker is busy: {reason}")]
    Busy {
        /// Short explanation for display.
        reason: &'static str,
    },

    /// The run deadline elapsed; the worker drained and stopped.
    #[error("deadline elapsed")]
    DeadlineElapsed,

    /// The run was cancelled before its deadline; the worker drained and
    /// stopped.
    #[error("cancelled")]
    Cancelled,
}

impl WorkError {
    pub(crate) fn missing_target() -> Self {
        Self::MissingTarget { reason: "not provided" }
    }

    pub(crate) fn non_positive_rps() -> Self {
        Self::InvalidRps { reason: "must be positive" }
    }

    pub(crate) fn oversized_rps() -> Self {
        Self::InvalidRps { reason: "too large, resulting tick < 1ns" }
    }

    pub(crate) fn negative_overtime() -> Self {
        Self::InvalidOvertime { reason: "must be more or equal zero" }
    }

    pub(crate) fn busy() -> Self {
        Self::Busy { reason: "try again later" }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            WorkError::MissingTarget { .. } => "work_missing_target",
            WorkError::InvalidRps { .. } => "work_invalid_rps",
            WorkError::InvalidOvertime { .. } => "work_invalid_overtime",
            WorkError::Busy { .. } => "work_busy",
            WorkError::DeadlineElapsed => "work_deadline_elapsed",
            WorkError::Cancelled => "work_cancelled",
        }
    }

    /// Whether this value is a context cause rather than a failure.
    ///
    /// A run that ends by deadline or cancellation reports *how* it ended;
    /// callers typically treat either as a successful run.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, WorkError::DeadlineElapsed | WorkError::Cancelled)
    }
}
