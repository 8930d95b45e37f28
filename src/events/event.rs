//! # The event record.
//!
//! [`Event`] is a value describing a single lifecycle moment of one worker
//! run. Payload rules per stage:
//!
//! | stage       | result                     | error                     |
//! |-------------|----------------------------|---------------------------|
//! | `Before`    | absent                     | absent                    |
//! | `After`     | what the target returned   | what the target returned  |
//! | `Cancelled` | absent                     | absent                    |
//!
//! An `After` event carries at most one populated side; both absent means
//! the target succeeded without producing a renderable result.

use std::fmt;

use crate::targets::{FailureRef, OutcomeRef};

/// The lifecycle moment an [`Event`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The moment just before the target is called.
    Before,

    /// The moment just after the target returned.
    After,

    /// A scheduled tick was skipped because every concurrency slot was held.
    Cancelled,
}

impl Stage {
    /// Returns the stable wire-friendly name of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Before => "before-target",
            Stage::After => "after-target",
            Stage::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Telemetry record generated during a worker run.
///
/// Payloads sit behind `Arc`, so one record clones cheaply onto every
/// observer channel.
#[derive(Clone)]
pub struct Event {
    /// The lifecycle stage this record marks.
    pub stage: Stage,
    /// What the target returned, if anything.
    pub result: Option<OutcomeRef>,
    /// The target failure, if any.
    pub error: Option<FailureRef>,
}

impl Event {
    /// Record for the moment an attempt is about to call the target.
    pub fn before() -> Self {
        Self { stage: Stage::Before, result: None, error: None }
    }

    /// Record carrying the target call's outcome.
    pub fn after(result: Option<OutcomeRef>, error: Option<FailureRef>) -> Self {
        Self { stage: Stage::After, result, error }
    }

    /// Record for a tick skipped at the concurrency ceiling.
    pub fn cancelled() -> Self {
        Self { stage: Stage::Cancelled, result: None, error: None }
    }

    /// Whether this record precedes a target call.
    pub fn is_before(&self) -> bool {
        self.stage == Stage::Before
    }

    /// Whether this record follows a target call.
    pub fn is_after(&self) -> bool {
        self.stage == Stage::After
    }

    /// Whether this record marks a skipped tick.
    pub fn is_cancelled(&self) -> bool {
        self.stage == Stage::Cancelled
    }

    /// Whether this record carries a target failure.
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

impl fmt::Display for Event {
    /// Renders the carried result, or `<empty>` when there is none.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Some(result) => write!(f, "{result}"),
            None => f.write_str("<empty>"),
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("stage", &self.stage)
            .field("result", &self.result.as_ref().map(|result| result.to_string()))
            .field("error", &self.error.as_ref().map(|error| error.to_string()))
            .finish()
    }
}
