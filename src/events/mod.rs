//! # Lifecycle events streamed to observers.
//!
//! Every run telemetry record is an [`Event`]: a [`Stage`] tag plus the
//! optional payload of the target call it describes.
//!
//! ## Delivery semantics
//! ```text
//! tick ──► slot acquired ──► attempt ──► BEFORE ──► target ──► AFTER
//!   │                                     (guaranteed)      (guaranteed)
//!   └────► all slots held ─────► CANCELLED
//!                               (best-effort, dropped on full queues)
//! ```
//! - `BEFORE`/`AFTER` are paired per attempt and ordered within one observer
//!   channel; cancellation may truncate the pair to a BEFORE-only prefix.
//! - `CANCELLED` records a skipped tick and has no ordering relationship to
//!   attempt events.

mod event;

pub use event::{Event, Stage};
