//! # Function-backed target (`TargetFn`)
//!
//! [`TargetFn`] wraps a closure `F: Fn(CancellationToken) -> Fut`, producing
//! a fresh future per call. Shared state, when needed, is captured explicitly
//! as an `Arc<...>` inside the closure.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use workforce::targets::{TargetError, TargetFn, TargetRef};
//!
//! let target: TargetRef = TargetFn::arc(|_ctx: CancellationToken| async {
//!     Ok::<_, TargetError>(Some(Box::new("pong") as _))
//! });
//! ```

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::targets::target::{BoxTargetFuture, Target, TargetOutput};

/// Function-backed target implementation.
///
/// Wraps a closure that *creates* a new future per call.
pub struct TargetFn<F> {
    f: F,
}

impl<F> TargetFn<F> {
    /// Creates a new function-backed target.
    ///
    /// Prefer [`TargetFn::arc`] when you immediately need a [`TargetRef`](crate::targets::TargetRef).
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the target and returns it as a shared handle.
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

impl<F, Fut> Target for TargetFn<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = TargetOutput> + Send + 'static,
{
    fn call(&self, ctx: CancellationToken) -> BoxTargetFuture {
        Box::pin((self.f)(ctx))
    }
}
