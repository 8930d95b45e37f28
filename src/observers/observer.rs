//! # Observer contract.
//!
//! Provides [`Observer`] — the extension point for consuming one worker
//! run's event stream (metrics, logging, assertions).
//!
//! The worker drives the lifecycle:
//! 1. at run start it spawns [`Observer::listen`] with a dedicated bounded
//!    receiver;
//! 2. after the in-flight attempts drain it closes the stream and awaits
//!    [`Observer::stop`], which must only return once the consumer has
//!    observed closure and flushed whatever it buffers.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::core::Handle;
use crate::events::Event;

/// Consumer of one worker run's event stream.
///
/// ### Implementation requirements
/// - `listen` should drain `events` until the channel closes; quitting early
///   is tolerated (the worker skips delivery to a closed stream) but loses
///   records.
/// - `stop` must block until the consumer finished, so the worker's drain can
///   guarantee nothing is dropped mid-flush. The built-ins use a zero-permit
///   `tokio::sync::Semaphore` — `listen` adds one permit when it finishes,
///   `stop` consumes one — which re-arms across sequential runs and keeps a
///   fleet-shared instance honest.
/// - Observers never send on the stream; they only receive.
#[async_trait]
pub trait Observer: Send + Sync + 'static {
    /// Drains the event stream of one run.
    ///
    /// `ctx` is the run's cancellation signal, `worker` identifies who is
    /// reporting. Called once per run, on a task of its own.
    async fn listen(&self, ctx: CancellationToken, worker: Handle, events: mpsc::Receiver<Event>);

    /// Terminal flush, invoked after the stream was closed.
    async fn stop(&self);
}

/// Shared handle to an observer object.
pub type ObserverRef = Arc<dyn Observer>;
