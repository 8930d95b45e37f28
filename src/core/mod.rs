//! # Engine core: pacing, dispatch and fleet composition.
//!
//! The only public API re-exported from here is [`Worker`], its [`Handle`],
//! and the fleet helpers. Everything else is internal wiring.
//!
//! ## Files & responsibilities
//! - **worker.rs**: [`Worker`] construction and the pace-and-dispatch loop:
//!   fixed-order validation, the busy cycle, the ticker, slot acquisition,
//!   observer streams, and the ordered drain.
//! - **attempt.rs**: one tracked attempt — BEFORE, target call, AFTER —
//!   with guaranteed delivery raced against cancellation.
//! - **fleet.rs**: one-shot single run ([`work`]), N workers under one
//!   shared deadline ([`farm`]), and the fleet constructor ([`force`]).
//!
//! ## Wiring (module-level flow)
//! ```text
//! caller ──► Worker::work(deadline, rps)
//!              │ validate: target → rps → period → overtime → busy CAS
//!              │ open one bounded stream per observer, spawn listen()
//!              ▼
//!        ticker (1s / rps, missed ticks skipped)
//!              │ each tick: try-acquire slot
//!              ├── none free ──► CANCELLED to every stream (best-effort)
//!              └── acquired  ──► spawn attempt (tracked):
//!                                  BEFORE ──► target(ctx) ──► AFTER
//!                                  (guaranteed sends, abandon on cancel;
//!                                   permit released on every exit path)
//!              ▼ deadline / cancel
//!        drain: wait in-flight ──► per observer, declaration order:
//!               close stream ──► await stop() ──► clear busy ──► cause
//! ```
//!
//! ## Rules
//! - No attempt is spawned after the loop observed cancellation.
//! - Streams close exactly once, only after in-flight reaches zero.
//! - Every observer's `stop` returns before `work` does.

mod attempt;
mod fleet;
mod worker;

pub use fleet::{farm, force, work};
pub use worker::{Handle, Worker};
