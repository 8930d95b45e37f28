//! # Fleet composition.
//!
//! Three thin layers over [`Worker`]:
//!
//! - [`work`] — hire one worker, run it for a duration, return the outcome.
//! - [`farm`] — run pre-built workers in parallel under a shared deadline
//!   with error-group semantics: the first fatal outcome cancels the rest.
//! - [`force`] — build `amount` identically-configured workers and farm
//!   them.
//!
//! ```text
//! force(target, rps, d, n, offers)
//!   └─► hire "force #0" … "force #n-1" ──► farm(workers, rps, d)
//!                                            │ one shared Deadline
//!                                            ├─► worker.work(deadline, rps)
//!                                            ├─► …
//!                                            └─► first fatal error?
//!                                                 cancel deadline, surface it
//! ```

use std::sync::Arc;

use tokio::task::JoinSet;
use tokio::time::Duration;

use crate::config::Offer;
use crate::core::worker::Worker;
use crate::deadline::Deadline;
use crate::error::WorkError;
use crate::targets::TargetRef;

/// One-shot convenience: hire a default-identity worker and run it for
/// `duration` at `rps`.
///
/// The outcome is surfaced as-is; a deadline-elapsed cause means the run
/// completed normally.
pub async fn work(
    target: TargetRef,
    rps: i64,
    duration: Duration,
    offers: impl IntoIterator<Item = Offer>,
) -> Result<(), WorkError> {
    let worker = Worker::hire("", Some(target), offers);

    worker.work(Deadline::after(duration), rps).await
}

/// Runs a set of pre-built workers in parallel under one shared deadline.
///
/// If any worker returns a non-cancellation error, the shared deadline is
/// cancelled so the siblings drain promptly, and that first error is
/// returned. Otherwise the deadline cause is returned once every worker has
/// drained.
pub async fn farm(
    workers: Vec<Arc<Worker>>,
    rps: i64,
    duration: Duration,
) -> Result<(), WorkError> {
    let deadline = Deadline::after(duration);

    let mut crew = JoinSet::new();
    for worker in workers {
        let shift = deadline.clone();
        crew.spawn(async move { worker.work(shift, rps).await });
    }

    let mut fatal: Option<WorkError> = None;
    while let Some(joined) = crew.join_next().await {
        if let Ok(Err(error)) = joined {
            if !error.is_cancellation() && fatal.is_none() {
                deadline.cancel();
                fatal = Some(error);
            }
        }
    }

    match fatal {
        Some(error) => Err(error),
        None => Err(deadline.cause()),
    }
}

/// Builds `amount` workers sharing one target and configuration, each with a
/// distinct synthesized identity, and runs them as a [`farm`].
pub async fn force(
    target: TargetRef,
    rps: i64,
    duration: Duration,
    amount: usize,
    offers: impl IntoIterator<Item = Offer>,
) -> Result<(), WorkError> {
    let offers: Vec<Offer> = offers.into_iter().collect();

    let workers = (0..amount)
        .map(|ident| {
            Arc::new(Worker::hire(
                format!("force #{ident}"),
                Some(Arc::clone(&target)),
                offers.clone(),
            ))
        })
        .collect();

    farm(workers, rps, duration).await
}
