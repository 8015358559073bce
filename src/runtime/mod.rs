//! Async runtime abstraction for background loads
//!
//! Loaders themselves are executor-agnostic futures. This module only
//! matters for [`crate::pending::spawn_load`], which needs somewhere to run
//! a load on behalf of synchronous callers such as a frame loop.

pub mod mock;
#[cfg(feature = "runtime-tokio")]
pub mod tokio_impl;

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

/// A boxed future that can be sent across threads
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Async task spawner trait
///
/// # Example
/// ```ignore
/// let spawner = TokioSpawner::new();
/// spawner.spawn(async {
///     // Async work here
/// });
/// ```
pub trait AsyncSpawner: Send + Sync + Clone + Debug {
    /// Run `task` to completion in the background
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static;

    /// Get the name of this runtime (for debugging)
    fn runtime_name(&self) -> &'static str;
}

// Re-export implementations
pub use mock::MockSpawner;

#[cfg(feature = "runtime-tokio")]
pub use tokio_impl::TokioSpawner;
