//! # Core target trait and its vocabulary types.
//!
//! Defines [`Target`] — an async, cancelable operation — and the aliases
//! describing what it produces: any stringable value ([`Outcome`]) or an
//! error ([`TargetError`]). Either side may be absent; the engine attaches
//! whatever comes back to the AFTER event unchanged.

use std::{error::Error, fmt, future::Future, pin::Pin, sync::Arc};

use tokio_util::sync::CancellationToken;

/// Anything a target may hand back for observers to render.
///
/// Blanket-implemented for every `Display + Send + Sync` type, so plain
/// strings and numbers qualify without ceremony.
pub trait Outcome: fmt::Display + Send + Sync {}

impl<T> Outcome for T where T: fmt::Display + Send + Sync {}

/// Shared outcome payload as carried inside events.
///
/// One attempt's outcome fans out to every observer channel; `Arc` keeps the
/// event cheap to clone.
pub type OutcomeRef = Arc<dyn Outcome>;

/// Shared error payload as carried inside events.
pub type FailureRef = Arc<dyn Error + Send + Sync>;

/// Error type a target returns.
pub type TargetError = Box<dyn Error + Send + Sync>;

/// What one target call resolves to.
///
/// `Ok(None)` is a legitimate result: the call succeeded and produced
/// nothing worth rendering.
pub type TargetOutput = Result<Option<Box<dyn Outcome>>, TargetError>;

/// Boxed future returned by [`Target::call`].
pub type BoxTargetFuture = Pin<Box<dyn Future<Output = TargetOutput> + Send + 'static>>;

/// Asynchronous, cancelable operation under load.
///
/// ## Rules
/// - `call(&self)` is `Fn`-shaped: no shared mutable state, every call
///   returns a fresh independent future.
/// - The future should check the token and exit promptly once the run is
///   cancelled; the engine waits for in-flight calls during its drain.
pub trait Target: Send + Sync + 'static {
    /// Creates a future that performs one invocation of the operation.
    fn call(&self, ctx: CancellationToken) -> BoxTargetFuture;
}

/// Shared handle to a target object.
pub type TargetRef = Arc<dyn Target>;
