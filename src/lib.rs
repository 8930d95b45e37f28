//! # workforce
//!
//! **Workforce** is a load-generation engine: it invokes a caller-supplied
//! target operation at a steady request rate for a bounded duration,
//! optionally across a fleet of independent workers, while streaming
//! lifecycle events to pluggable observers. Use it for performance testing,
//! capacity probing, and synthetic traffic against in-process callables
//! (HTTP clients, database probes, RPC stubs).
//!
//! ## Features
//!
//! | Area            | Description                                              | Key types / functions                  |
//! |-----------------|----------------------------------------------------------|----------------------------------------|
//! | **Workers**     | Paced dispatch with a per-worker concurrency ceiling.    | [`Worker`], [`Offer`]                  |
//! | **Targets**     | Async, cancellation-aware operations under load.         | [`Target`], [`TargetFn`], [`TargetRef`]|
//! | **Observers**   | Per-run event streams with guaranteed lifecycle pairs.   | [`Observer`], [`StatsCollector`]       |
//! | **Fleets**      | N workers under one shared deadline.                     | [`farm`], [`force`], [`work`]          |
//! | **Run control** | Cancellation with a distinguishable deadline cause.      | [`Deadline`], [`WorkError`]            |
//!
//! ## Optional features
//! - `logging` *(default)*: exports [`LogWriter`], an observer that forwards
//!   every event to `tracing`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use tokio::time::Duration;
//! use workforce::targets::{TargetError, TargetFn};
//! use workforce::{Offer, ObserverRef, StatsCollector};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let stats = Arc::new(StatsCollector::new());
//!     let target = TargetFn::arc(|_ctx| async {
//!         Ok::<_, TargetError>(Some(Box::new("pong") as _))
//!     });
//!
//!     // Fire the target 20 times per second for two seconds, at most ten
//!     // calls in flight, counting what happens.
//!     let outcome = workforce::work(
//!         target,
//!         20,
//!         Duration::from_secs(2),
//!         [
//!             Offer::overtime(10),
//!             Offer::listeners(vec![Arc::clone(&stats) as ObserverRef]),
//!         ],
//!     )
//!     .await;
//!
//!     assert!(outcome.unwrap_err().is_cancellation());
//!     println!("{:?}", stats.snapshot());
//! }
//! ```
//!
//! ---

mod config;
mod core;
mod deadline;
mod error;

pub mod events;
pub mod observers;
pub mod targets;

// ---- Public re-exports ----

pub use config::{Config, Offer};
pub use crate::core::{farm, force, work, Handle, Worker};
pub use deadline::Deadline;
pub use error::WorkError;
pub use events::{Event, Stage};
pub use observers::{Observer, ObserverRef, Stats, StatsCollector};
pub use targets::{Outcome, OutcomeRef, Target, TargetFn, TargetRef};

// Optional: expose the tracing-backed log observer.
// Enable with: `--features logging` (on by default).
#[cfg(feature = "logging")]
pub use observers::LogWriter;
