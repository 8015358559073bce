//! Mock async spawner for testing
//!
//! Tasks can be dropped, run inline, or queued until the test decides to
//! run them, which makes the in-flight state of a background load
//! observable.

use super::{AsyncSpawner, BoxFuture};
use parking_lot::Mutex;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Spawn behavior for MockSpawner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockSpawnBehavior {
    /// Drop tasks immediately (don't execute)
    Drop,
    /// Block on tasks synchronously inside `spawn`
    BlockSync,
    /// Queue tasks until [`MockSpawner::run_pending`]
    Deferred,
}

/// Mock async spawner for testing
#[derive(Clone)]
pub struct MockSpawner {
    behavior: MockSpawnBehavior,
    queue: Arc<Mutex<Vec<BoxFuture<'static, ()>>>>,
}

impl Default for MockSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSpawner {
    /// Create a new mock spawner that drops tasks
    pub fn new() -> Self {
        Self::with_behavior(MockSpawnBehavior::Drop)
    }

    /// Create a mock spawner with specific behavior
    pub fn with_behavior(behavior: MockSpawnBehavior) -> Self {
        Self {
            behavior,
            queue: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock spawner that runs tasks synchronously
    pub fn blocking() -> Self {
        Self::with_behavior(MockSpawnBehavior::BlockSync)
    }

    /// Create a mock spawner that holds tasks until `run_pending`
    pub fn deferred() -> Self {
        Self::with_behavior(MockSpawnBehavior::Deferred)
    }

    /// Number of queued tasks
    pub fn pending_tasks(&self) -> usize {
        self.queue.lock().len()
    }

    /// Run every queued task to completion, returning how many ran
    pub fn run_pending(&self) -> usize {
        let tasks = std::mem::take(&mut *self.queue.lock());
        let count = tasks.len();
        for task in tasks {
            futures::executor::block_on(task);
        }
        count
    }
}

impl fmt::Debug for MockSpawner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockSpawner")
            .field("behavior", &self.behavior)
            .field("pending_tasks", &self.pending_tasks())
            .finish()
    }
}

impl AsyncSpawner for MockSpawner {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match self.behavior {
            MockSpawnBehavior::Drop => drop(task),
            MockSpawnBehavior::BlockSync => futures::executor::block_on(task),
            MockSpawnBehavior::Deferred => self.queue.lock().push(Box::pin(task)),
        }
    }

    fn runtime_name(&self) -> &'static str {
        "Mock"
    }
}
