//! Tokio async runtime implementation

use super::AsyncSpawner;
use std::future::Future;

/// Tokio-based async spawner
///
/// Spawns tasks on the ambient Tokio runtime; `spawn` panics when called
/// outside of one, like `tokio::spawn`.
#[derive(Clone, Debug, Default, Copy)]
pub struct TokioSpawner;

impl TokioSpawner {
    /// Create a new Tokio spawner
    pub fn new() -> Self {
        Self
    }
}

impl AsyncSpawner for TokioSpawner {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(task);
    }

    fn runtime_name(&self) -> &'static str {
        "Tokio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_tokio_spawner() {
        let spawner = TokioSpawner::new();
        let ran = Arc::new(AtomicBool::new(false));
        let ran_clone = ran.clone();

        spawner.spawn(async move {
            ran_clone.store(true, Ordering::SeqCst);
        });

        // Give the task time to run
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_tokio_runtime_name() {
        assert_eq!(TokioSpawner::new().runtime_name(), "Tokio");
    }
}
