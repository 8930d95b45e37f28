//! # Worker: the pace-and-dispatch loop.
//!
//! A [`Worker`] owns an identity, a target and a finalized configuration,
//! and runs the engine's core loop: a ticker fires once per period, each
//! tick tries to claim a concurrency slot, and each claimed slot becomes a
//! spawned attempt.
//!
//! ## Run state machine
//! ```text
//! IDLE ──validate ok──► BUSY ──deadline / cancel──► DRAINING ──all stopped──► IDLE
//! ```
//! Validation failures never leave `IDLE`; the busy flip is the only
//! side-effecting step and happens last.
//!
//! ## Rules
//! - At most one run per worker at a time; competing calls get `Busy`.
//! - At no instant are more than `overtime` attempts in flight.
//! - The drain waits for in-flight attempts, then closes each observer
//!   stream and awaits its `stop`, in declaration order, before the busy
//!   flag clears.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::time::{self, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::config::{Config, Offer, WorkerConfig, BURST_FACTOR, DEFAULT_IDENT};
use crate::core::attempt::Attempt;
use crate::deadline::Deadline;
use crate::error::WorkError;
use crate::events::Event;
use crate::targets::TargetRef;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Lightweight identity handle passed to observers.
#[derive(Clone)]
pub struct Handle {
    ident: Arc<str>,
}

impl Handle {
    pub(crate) fn named(ident: &str) -> Self {
        Self { ident: Arc::from(ident) }
    }

    /// The identity of the worker this run belongs to.
    pub fn ident(&self) -> &str {
        &self.ident
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident)
    }
}

/// A single paced load generator.
///
/// Reusable across non-overlapping runs; cheap to share behind an `Arc` for
/// fleets and concurrent introspection.
pub struct Worker {
    ident: String,
    target: Option<TargetRef>,
    config: WorkerConfig,
    slots: Option<Arc<Semaphore>>,
    slot_capacity: usize,
    busy: AtomicBool,
}

impl Worker {
    /// Hires a worker: applies `offers` over the defaults and finalizes the
    /// configuration.
    ///
    /// Construction is total — an absent target or a negative overtime is
    /// kept and diagnosed by [`work`](Worker::work), so option mistakes
    /// surface where the caller can handle them. An empty `ident` falls back
    /// to a fixed placeholder.
    pub fn hire(
        ident: impl Into<String>,
        target: Option<TargetRef>,
        offers: impl IntoIterator<Item = Offer>,
    ) -> Self {
        let mut config = WorkerConfig::default();
        for offer in offers {
            offer.apply(&mut config);
        }

        let ident = ident.into();
        let ident = if ident.is_empty() { DEFAULT_IDENT.to_string() } else { ident };

        // A negative ceiling leaves the semaphore unallocated; the capacity
        // is clamped to what the semaphore implementation can count.
        let slot_capacity = usize::try_from(config.overtime)
            .map(|capacity| capacity.min(Semaphore::MAX_PERMITS))
            .unwrap_or(0);
        let slots = match config.overtime {
            overtime if overtime < 0 => None,
            _ => Some(Arc::new(Semaphore::new(slot_capacity))),
        };

        Self { ident, target, config, slots, slot_capacity, busy: AtomicBool::new(false) }
    }

    /// Runs the dispatch loop until `deadline` fires, then drains.
    ///
    /// ### Validation (fixed order, no side effects before the busy flip)
    /// 1. a target must be present — [`WorkError::MissingTarget`]
    /// 2. `rps >= 1` — [`WorkError::InvalidRps`]
    /// 3. `1s / rps` must not truncate below 1ns — [`WorkError::InvalidRps`]
    /// 4. overtime must be non-negative — [`WorkError::InvalidOvertime`]
    /// 5. no other run in progress — [`WorkError::Busy`]
    ///
    /// On normal termination the cancellation cause is returned
    /// ([`WorkError::DeadlineElapsed`] or [`WorkError::Cancelled`]); callers
    /// typically fold it into success via
    /// [`is_cancellation`](WorkError::is_cancellation).
    pub async fn work(&self, deadline: Deadline, rps: i64) -> Result<(), WorkError> {
        let target = match &self.target {
            Some(target) => Arc::clone(target),
            None => return Err(WorkError::missing_target()),
        };

        if rps < 1 {
            return Err(WorkError::non_positive_rps());
        }

        let period = NANOS_PER_SEC / rps;
        if period < 1 {
            return Err(WorkError::oversized_rps());
        }
        let period = Duration::from_nanos(period as u64);

        let slots = match &self.slots {
            Some(slots) => Arc::clone(slots),
            None => return Err(WorkError::negative_overtime()),
        };

        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(WorkError::busy());
        }

        let cause = self.run(target, slots, deadline, period, rps).await;
        self.busy.store(false, Ordering::Release);

        Err(cause)
    }

    /// Public copy of the worker internals.
    pub fn config(&self) -> Config {
        Config {
            ident: self.ident.clone(),
            listeners: self.config.listeners.clone(),
            overtime: self.config.overtime,
            slot_capacity: self.slot_capacity,
            busy: self.busy.load(Ordering::Acquire),
        }
    }

    /// The identity handle observers receive.
    pub fn handle(&self) -> Handle {
        Handle::named(&self.ident)
    }

    async fn run(
        &self,
        target: TargetRef,
        slots: Arc<Semaphore>,
        deadline: Deadline,
        period: Duration,
        rps: i64,
    ) -> WorkError {
        let token = deadline.token();
        let streams = self.open_streams(&token, rps);
        let inflight = TaskTracker::new();

        let mut ticker = time::interval(period);
        // a late tick is a missed dispatch opportunity, never a burst
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = deadline.cancelled() => break,
                _ = ticker.tick() => self.dispatch(&target, &slots, &token, &streams, &inflight),
            }
        }

        self.complete(streams, inflight).await;

        deadline.cause()
    }

    /// Opens one bounded stream per observer and spawns its consumer.
    fn open_streams(&self, token: &CancellationToken, rps: i64) -> Vec<mpsc::Sender<Event>> {
        let capacity = rps.saturating_mul(BURST_FACTOR) as usize;
        let handle = self.handle();

        let mut streams = Vec::with_capacity(self.config.listeners.len());
        for listener in &self.config.listeners {
            let (tx, rx) = mpsc::channel(capacity);
            let observer = Arc::clone(listener);
            let ctx = token.clone();
            let worker = handle.clone();

            tokio::spawn(async move { observer.listen(ctx, worker, rx).await });
            streams.push(tx);
        }

        streams
    }

    /// One tick: claim a slot and spawn an attempt, or record the skip.
    fn dispatch(
        &self,
        target: &TargetRef,
        slots: &Arc<Semaphore>,
        token: &CancellationToken,
        streams: &[mpsc::Sender<Event>],
        inflight: &TaskTracker,
    ) {
        match Arc::clone(slots).try_acquire_owned() {
            Ok(permit) => {
                inflight.spawn(
                    Attempt {
                        permit,
                        target: Arc::clone(target),
                        token: token.clone(),
                        streams: streams.to_vec(),
                    }
                    .run(),
                );
            }
            // every slot is held: skip this tick, telling listeners is
            // best-effort — a full stream just loses the record
            Err(_) => {
                for stream in streams {
                    let _ = stream.try_send(Event::cancelled());
                }
            }
        }
    }

    /// The drain: in-flight attempts first, then observers in declaration
    /// order — close the stream, await its flush.
    async fn complete(&self, streams: Vec<mpsc::Sender<Event>>, inflight: TaskTracker) {
        inflight.close();
        inflight.wait().await;

        for (stream, listener) in streams.into_iter().zip(&self.config.listeners) {
            drop(stream);
            listener.stop().await;
        }
    }
}

impl fmt::Display for Worker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident)
    }
}
