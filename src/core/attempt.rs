//! # One tracked attempt.
//!
//! An [`Attempt`] is the short-lived task spawned per acquired slot. It
//! brackets a single target call with its paired lifecycle records:
//!
//! ```text
//! BEFORE (guaranteed) ──► target(ctx) ──► AFTER (guaranteed, with payload)
//! ```
//!
//! Guaranteed delivery blocks on stream capacity but races the run's
//! cancellation: at shutdown a blocked send is abandoned and the attempt
//! exits, leaving a BEFORE-only prefix on the affected streams. The slot
//! permit is owned by the attempt and released on every exit path.

use std::sync::Arc;

use tokio::sync::{mpsc, OwnedSemaphorePermit};
use tokio_util::sync::CancellationToken;

use crate::events::Event;
use crate::targets::TargetRef;

/// State owned by one spawned attempt.
pub(crate) struct Attempt {
    /// Slot held for the attempt's whole lifetime.
    pub permit: OwnedSemaphorePermit,
    /// The operation under load.
    pub target: TargetRef,
    /// The run's cancellation signal, shared with the target.
    pub token: CancellationToken,
    /// Every observer stream of the run.
    pub streams: Vec<mpsc::Sender<Event>>,
}

impl Attempt {
    /// Runs the attempt to completion.
    pub(crate) async fn run(self) {
        let Self { permit: _permit, target, token, streams } = self;

        if !publish(&streams, &token, Event::before()).await {
            // shutdown won the race before the target was ever called
            return;
        }

        let event = match target.call(token.clone()).await {
            Ok(result) => Event::after(result.map(Arc::from), None),
            Err(error) => Event::after(None, Some(Arc::from(error))),
        };

        publish(&streams, &token, event).await;
    }
}

/// Guaranteed delivery to every stream, in declaration order.
///
/// Returns `false` when cancellation interrupted delivery. A stream whose
/// listener quit early is skipped silently.
async fn publish(
    streams: &[mpsc::Sender<Event>],
    token: &CancellationToken,
    event: Event,
) -> bool {
    for stream in streams {
        tokio::select! {
            biased;
            sent = stream.send(event.clone()) => {
                let _ = sent;
            }
            _ = token.cancelled() => return false,
        }
    }

    true
}
