//! # Observers: pluggable consumers of run telemetry.
//!
//! Each observer attached to a worker gets its own bounded event stream for
//! the duration of one run, plus a terminal flush hook.
//!
//! ## Architecture
//! ```text
//! dispatch loop ──┬──► [stream 1] ──► observer1.listen()
//!   + attempts    ├──► [stream 2] ──► observer2.listen()
//!                 └──► [stream N] ──► observerN.listen()
//!                      (bounded, 2×rps)
//!
//! drain (per observer, declaration order):
//!   close stream ──► observer.stop() returns after the consumer
//!                    observed closure and finished flushing
//! ```
//!
//! ## Rules
//! - A slow observer backpressures BEFORE/AFTER delivery but only costs
//!   dropped CANCELLED records; it can never deadlock the worker past its
//!   deadline.
//! - One observer instance is bound to at most one active run at a time;
//!   reuse across sequential runs must re-arm internal signaling.
//!
//! ## Built-ins
//! - [`StatsCollector`] — atomic counters over the stream, with a
//!   [`Stats`] snapshot.
//! - [`LogWriter`] — one `tracing` event per record (`logging` feature).

#[cfg(feature = "logging")]
mod log;
mod observer;
mod stats;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use observer::{Observer, ObserverRef};
pub use stats::{Stats, StatsCollector};
