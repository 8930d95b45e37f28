//! # Per-worker configuration.
//!
//! A worker is configured once, at hire time, by applying [`Offer`]s over the
//! defaults. Configuration is immutable afterwards; [`Config`] is the public
//! read-only snapshot used by tests and monitoring.
//!
//! ## Sentinel values
//! - `overtime = 1_000_000` (default) → effectively unbounded concurrency
//! - `overtime = 0` → no slot is ever available; every tick is skipped
//! - `overtime < 0` → kept as-is so the run can report `InvalidOvertime`

use crate::observers::ObserverRef;

/// Default concurrency ceiling: large enough to never gate dispatch.
pub(crate) const DEFAULT_OVERTIME: i64 = 1_000_000;

/// Identity used when a worker is hired with an empty one.
pub(crate) const DEFAULT_IDENT: &str = "anonymous";

/// Multiplier for observer stream capacity. A capacity of `2 × rps` absorbs
/// bursts of paired BEFORE/AFTER records without stalling dispatch.
pub(crate) const BURST_FACTOR: i64 = 2;

/// Internal option set, finalized before the first run.
#[derive(Clone)]
pub(crate) struct WorkerConfig {
    /// Maximum number of concurrently executing attempts.
    pub overtime: i64,
    /// Observers, in the order their streams are opened and closed.
    pub listeners: Vec<ObserverRef>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self { overtime: DEFAULT_OVERTIME, listeners: Vec::new() }
    }
}

/// A single configuration adjustment passed to [`Worker::hire`](crate::Worker::hire).
///
/// Offers are pure setters applied in order; applying the same offer twice
/// keeps the later value. Order among *distinct* offers does not matter.
#[derive(Clone)]
pub struct Offer(Adjustment);

#[derive(Clone)]
enum Adjustment {
    Overtime(i64),
    Listeners(Vec<ObserverRef>),
}

impl Offer {
    /// Sets the concurrency ceiling: at most `limit` attempts in flight.
    pub fn overtime(limit: i64) -> Self {
        Self(Adjustment::Overtime(limit))
    }

    /// Replaces the observer list.
    pub fn listeners(listeners: Vec<ObserverRef>) -> Self {
        Self(Adjustment::Listeners(listeners))
    }

    pub(crate) fn apply(self, config: &mut WorkerConfig) {
        match self.0 {
            Adjustment::Overtime(limit) => config.overtime = limit,
            Adjustment::Listeners(listeners) => config.listeners = listeners,
        }
    }
}

/// Public copy of a worker's internals.
#[derive(Clone)]
pub struct Config {
    /// Worker identity.
    pub ident: String,
    /// Attached observers, in declaration order.
    pub listeners: Vec<ObserverRef>,
    /// Configured concurrency ceiling (possibly negative, as given).
    pub overtime: i64,
    /// Capacity of the slot semaphore; 0 when it was left unallocated.
    pub slot_capacity: usize,
    /// Whether a run is currently in progress.
    pub busy: bool,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::observers::StatsCollector;

    #[test]
    fn defaults_allow_effectively_unbounded_dispatch() {
        let config = WorkerConfig::default();

        assert_eq!(config.overtime, 1_000_000);
        assert!(config.listeners.is_empty());
    }

    #[test]
    fn offers_apply_in_order_and_overwrite() {
        let mut config = WorkerConfig::default();

        Offer::overtime(100).apply(&mut config);
        Offer::listeners(vec![Arc::new(StatsCollector::new())]).apply(&mut config);
        Offer::overtime(5).apply(&mut config);

        assert_eq!(config.overtime, 5);
        assert_eq!(config.listeners.len(), 1);
    }
}
