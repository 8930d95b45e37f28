//! # Stateful observer that counts lifecycle records.
//!
//! [`StatsCollector`] keeps four atomic counters over one run's stream and
//! exposes them as a [`Stats`] snapshot. It is the workhorse for tests and
//! quick capacity probes: attach it, run, read the totals.
//!
//! ```text
//! Cancelled ──► cancelled += 1        (ticks skipped at the ceiling)
//! Before    ──► received  += 1        (attempts dispatched)
//! After     ──► success / failure += 1
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::{mpsc, Semaphore};
use tokio_util::sync::CancellationToken;

use crate::core::Handle;
use crate::events::{Event, Stage};
use crate::observers::observer::Observer;

/// Point-in-time totals of a [`StatsCollector`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Ticks skipped because every concurrency slot was held.
    pub cancelled: u64,
    /// Attempts dispatched (BEFORE records).
    pub received: u64,
    /// Attempts whose target returned without error.
    pub success: u64,
    /// Attempts whose target returned an error.
    pub failure: u64,
}

/// Counting observer.
///
/// Counters accumulate across runs and [`snapshot`](StatsCollector::snapshot)
/// is safe to call mid-run. The same instance may serve several concurrent
/// runs (a fleet sharing one offer list): each run's drain consumes exactly
/// one completion.
pub struct StatsCollector {
    cancelled: AtomicU64,
    received: AtomicU64,
    success: AtomicU64,
    failure: AtomicU64,
    done: Semaphore,
}

impl StatsCollector {
    /// Creates a collector with zeroed counters.
    pub fn new() -> Self {
        Self {
            cancelled: AtomicU64::new(0),
            received: AtomicU64::new(0),
            success: AtomicU64::new(0),
            failure: AtomicU64::new(0),
            done: Semaphore::new(0),
        }
    }

    /// Returns the current totals.
    pub fn snapshot(&self) -> Stats {
        Stats {
            cancelled: self.cancelled.load(Ordering::Relaxed),
            received: self.received.load(Ordering::Relaxed),
            success: self.success.load(Ordering::Relaxed),
            failure: self.failure.load(Ordering::Relaxed),
        }
    }

    fn record(&self, event: &Event) {
        match event.stage {
            Stage::Cancelled => self.cancelled.fetch_add(1, Ordering::Relaxed),
            Stage::Before => self.received.fetch_add(1, Ordering::Relaxed),
            Stage::After if event.is_failure() => self.failure.fetch_add(1, Ordering::Relaxed),
            Stage::After => self.success.fetch_add(1, Ordering::Relaxed),
        };
    }
}

impl Default for StatsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Observer for StatsCollector {
    async fn listen(
        &self,
        _ctx: CancellationToken,
        _worker: Handle,
        mut events: mpsc::Receiver<Event>,
    ) {
        while let Some(event) = events.recv().await {
            self.record(&event);
        }

        self.done.add_permits(1);
    }

    async fn stop(&self) {
        if let Ok(completed) = self.done.acquire().await {
            // keep the count in sync with finished consumers
            completed.forget();
        }
    }
}
