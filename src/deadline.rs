//! # Run context: cancellation with an optional deadline.
//!
//! A [`Deadline`] is the single signal governing one run (or one fleet). It
//! wraps a [`CancellationToken`] shared with spawned attempts, targets and
//! observers, optionally bound to an instant after which the run must end.
//!
//! Because the deadline and the token live together, a finished run can
//! report *which* cause ended it: [`WorkError::DeadlineElapsed`] when the
//! clock ran out, [`WorkError::Cancelled`] when somebody called
//! [`cancel`](Deadline::cancel) first.

use tokio::time::{self, Duration, Instant};
use tokio_util::sync::CancellationToken;

use crate::error::WorkError;

/// Cancellation signal for one run, optionally bound to a deadline.
///
/// Clones share the same signal: cancelling one cancels them all, which is
/// how a fleet fans a single shutdown out to every worker.
#[derive(Clone)]
pub struct Deadline {
    token: CancellationToken,
    at: Option<Instant>,
}

impl Deadline {
    /// A deadline `duration` from now.
    pub fn after(duration: Duration) -> Self {
        Self { token: CancellationToken::new(), at: Some(Instant::now() + duration) }
    }

    /// No deadline; the run lasts until [`cancel`](Deadline::cancel).
    pub fn none() -> Self {
        Self { token: CancellationToken::new(), at: None }
    }

    /// Ends the run before its deadline.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether the signal has fired.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// The raw token shared with attempts, targets and observers.
    ///
    /// The token fires once the deadline is reached *and observed* by a task
    /// suspended on [`cancelled`](Deadline::cancelled); holders of the bare
    /// token never outlive that task inside the engine.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Suspends until the run ends, by cancellation or by deadline.
    ///
    /// When the deadline fires first, the shared token is cancelled so every
    /// holder observes the shutdown.
    pub async fn cancelled(&self) {
        match self.at {
            Some(at) => {
                tokio::select! {
                    _ = self.token.cancelled() => {}
                    _ = time::sleep_until(at) => self.token.cancel(),
                }
            }
            None => self.token.cancelled().await,
        }
    }

    /// The cause to report once the signal fired.
    pub fn cause(&self) -> WorkError {
        match self.at {
            Some(at) if Instant::now() >= at => WorkError::DeadlineElapsed,
            _ => WorkError::Cancelled,
        }
    }
}
