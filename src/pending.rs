//! Background loads for synchronous callers
//!
//! A frame loop cannot await a load. [`spawn_load`] runs the load on an
//! [`AsyncSpawner`] and hands back a [`PendingAsset`] the loop can poll
//! once per frame.

use crate::asset::Asset;
use crate::loader::{AssetLoader, AssetLoaderExt};
use crate::runtime::AsyncSpawner;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Where a background load currently stands
pub enum LoadState<T> {
    /// The load has not resolved yet
    Pending,

    /// The loader produced a handle
    Loaded(Arc<T>),

    /// The loader resolved to nothing; the reason was logged by the loader
    Failed,
}

impl<T> Clone for LoadState<T> {
    fn clone(&self) -> Self {
        match self {
            LoadState::Pending => LoadState::Pending,
            LoadState::Loaded(asset) => LoadState::Loaded(Arc::clone(asset)),
            LoadState::Failed => LoadState::Failed,
        }
    }
}

impl<T> fmt::Debug for LoadState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Pending => f.write_str("Pending"),
            LoadState::Loaded(_) => f.write_str("Loaded"),
            LoadState::Failed => f.write_str("Failed"),
        }
    }
}

/// Handle to a load running in the background
pub struct PendingAsset<T> {
    path: String,
    state: Arc<RwLock<LoadState<T>>>,
}

impl<T> Clone for PendingAsset<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> fmt::Debug for PendingAsset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingAsset")
            .field("path", &self.path)
            .field("state", &*self.state.read())
            .finish()
    }
}

impl<T> PendingAsset<T> {
    fn new(path: String) -> Self {
        Self {
            path,
            state: Arc::new(RwLock::new(LoadState::Pending)),
        }
    }

    /// Path this load was issued for
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the current load state
    pub fn state(&self) -> LoadState<T> {
        self.state.read().clone()
    }

    /// Check if loading is complete
    pub fn is_ready(&self) -> bool {
        matches!(*self.state.read(), LoadState::Loaded(_))
    }

    /// Check if loading failed
    pub fn is_failed(&self) -> bool {
        matches!(*self.state.read(), LoadState::Failed)
    }

    /// Check if loading is still in progress
    pub fn is_loading(&self) -> bool {
        matches!(*self.state.read(), LoadState::Pending)
    }

    /// Get the loaded asset if loading is complete
    pub fn get(&self) -> Option<Arc<T>> {
        match &*self.state.read() {
            LoadState::Loaded(asset) => Some(Arc::clone(asset)),
            _ => None,
        }
    }

    fn resolve(&self, result: Option<Arc<T>>) {
        *self.state.write() = match result {
            Some(asset) => LoadState::Loaded(asset),
            None => LoadState::Failed,
        };
    }
}

/// Start loading `path` as a `T` on `spawner`
///
/// If the spawner drops the task the handle stays `Pending` forever.
pub fn spawn_load<T, L, S>(loader: Arc<L>, spawner: &S, path: impl Into<String>) -> PendingAsset<T>
where
    T: Asset,
    L: AssetLoader + ?Sized + 'static,
    S: AsyncSpawner,
{
    let pending = PendingAsset::new(path.into());
    let handle = pending.clone();

    spawner.spawn(async move {
        let result = loader.load_async::<T>(handle.path()).await;
        handle.resolve(result);
    });

    pending
}
