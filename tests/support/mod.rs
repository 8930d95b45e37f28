//! Shared fixtures for the black-box suites: stock targets with distinct
//! timing profiles, a deliberately misbehaving observer, and a helper that
//! folds cancellation causes into success.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex, Semaphore};
use tokio::time::{self, Duration};
use tokio_util::sync::CancellationToken;

use workforce::targets::{TargetError, TargetFn, TargetOutput, TargetRef};
use workforce::{Event, Handle, Observer, WorkError};

pub fn done(value: &'static str) -> TargetOutput {
    Ok(Some(Box::new(value)))
}

/// Succeeds immediately.
pub fn noop() -> TargetRef {
    TargetFn::arc(|_ctx| async { done("done") })
}

/// Blocks until the run is cancelled, then succeeds.
pub fn awaitable() -> TargetRef {
    TargetFn::arc(|ctx: CancellationToken| async move {
        ctx.cancelled().await;
        done("done")
    })
}

/// Every second call sleeps one second; calls serialize on a shared lock.
pub fn slow() -> TargetRef {
    let calls = Arc::new(Mutex::new(0_u64));

    TargetFn::arc(move |_ctx| {
        let calls = Arc::clone(&calls);
        async move {
            let mut calls = calls.lock().await;
            *calls += 1;

            if *calls % 2 == 0 {
                time::sleep(Duration::from_secs(1)).await;
            }

            done("done")
        }
    })
}

/// Mixed profile: every third call fails, every fifth sleeps one second,
/// the rest succeed fast; calls serialize on a shared lock.
pub fn fuzz_buzz() -> TargetRef {
    let calls = Arc::new(Mutex::new(0_u64));

    TargetFn::arc(move |_ctx| {
        let calls = Arc::clone(&calls);
        async move {
            let mut calls = calls.lock().await;
            *calls += 1;

            match *calls {
                turn if turn % 3 == 0 => Err(TargetError::from("boom")),
                turn if turn % 5 == 0 => {
                    time::sleep(Duration::from_secs(1)).await;
                    done("busy")
                }
                _ => done("done"),
            }
        }
    })
}

/// Observer that consumes exactly two events, then abandons its stream.
///
/// Models a stalled or crashed consumer: the engine must keep pacing, drop
/// nothing it guaranteed elsewhere, and still complete its drain.
pub struct Sentry {
    done: Semaphore,
}

impl Sentry {
    pub fn new() -> Self {
        Self { done: Semaphore::new(0) }
    }
}

#[async_trait]
impl Observer for Sentry {
    async fn listen(
        &self,
        _ctx: CancellationToken,
        _worker: Handle,
        mut events: mpsc::Receiver<Event>,
    ) {
        events.recv().await;
        events.recv().await;

        self.done.add_permits(1);
    }

    async fn stop(&self) {
        if let Ok(completed) = self.done.acquire().await {
            completed.forget();
        }
    }
}

/// Folds the context causes into success, keeping real errors.
pub fn finish(outcome: Result<(), WorkError>) -> Result<(), WorkError> {
    match outcome {
        Err(error) if error.is_cancellation() => Ok(()),
        other => other,
    }
}
