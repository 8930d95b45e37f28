//! # Logging observer for debugging and demos.
//!
//! [`LogWriter`] emits one `tracing` event per lifecycle record. Useful while
//! wiring up a load profile; attach a real metrics observer for measurement.
//!
//! ## Output shape
//! ```text
//! DEBUG attempt dispatched      worker=probe
//! DEBUG target finished         worker=probe result=200 OK
//! WARN  target failed           worker=probe error=connection refused
//! TRACE tick skipped            worker=probe
//! ```

use async_trait::async_trait;
use tokio::sync::{mpsc, Semaphore};
use tokio_util::sync::CancellationToken;

use crate::core::Handle;
use crate::events::{Event, Stage};
use crate::observers::observer::Observer;

/// Observer that forwards every record to `tracing`.
///
/// Enabled via the `logging` feature. Skipped ticks log at `trace` level so
/// a saturated run does not flood the subscriber.
pub struct LogWriter {
    done: Semaphore,
}

impl LogWriter {
    /// Creates a new log observer.
    pub fn new() -> Self {
        Self { done: Semaphore::new(0) }
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Observer for LogWriter {
    async fn listen(
        &self,
        _ctx: CancellationToken,
        worker: Handle,
        mut events: mpsc::Receiver<Event>,
    ) {
        while let Some(event) = events.recv().await {
            match event.stage {
                Stage::Before => {
                    tracing::debug!(worker = %worker, "attempt dispatched");
                }
                Stage::After => match event.error.as_ref() {
                    Some(error) => tracing::warn!(worker = %worker, %error, "target failed"),
                    None => tracing::debug!(worker = %worker, result = %event, "target finished"),
                },
                Stage::Cancelled => {
                    tracing::trace!(worker = %worker, "tick skipped");
                }
            }
        }

        self.done.add_permits(1);
    }

    async fn stop(&self) {
        if let Ok(completed) = self.done.acquire().await {
            completed.forget();
        }
    }
}
