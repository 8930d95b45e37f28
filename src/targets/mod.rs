//! # Target abstraction: the operation under load.
//!
//! A target is the caller-supplied async operation the engine fires at a
//! steady rate. It receives the run's [`CancellationToken`] and returns an
//! optional stringable [`Outcome`] or an error; the engine forwards both to
//! observers verbatim and never reacts to either.
//!
//! - **[`Target`]** — trait for cancellation-aware async operations
//! - **[`TargetFn`]** — function-backed implementation wrapping closures
//! - **[`TargetRef`]** — shared handle (`Arc<dyn Target>`) passed to workers
//!
//! ## Rules
//! - A target must be safe to invoke concurrently up to the worker's
//!   overtime ceiling; each [`Target::call`] produces an independent future.
//! - A target is expected to observe cancellation and return promptly; the
//!   engine never aborts a running call.
//! - A failing target never stops the worker.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

mod target;
mod target_fn;

pub use target::{
    BoxTargetFuture, FailureRef, Outcome, OutcomeRef, Target, TargetError, TargetOutput,
    TargetRef,
};
pub use target_fn::TargetFn;
