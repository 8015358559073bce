//! asset_gateway - Interchangeable async asset loaders for engine asset pipelines
//!
//! # Features
//! - One object-safe loader contract: async load-by-path and release
//! - `ManagedAssetLoader` over a reference-counted addressable host
//! - `SimpleAssetLoader` over a bundled-resource host
//! - Failures resolve to `None` and are only ever logged
//! - Background loads polled from synchronous frame loops
//!
//! # Quick Start
//!
//! ```ignore
//! use asset_gateway::{AssetLoaderExt, ManagedAssetLoader, MockAddressables};
//!
//! let host = MockAddressables::new();
//! let loader = ManagedAssetLoader::new(host);
//! let orc = loader.load_async::<Mesh>("enemy/orc").await;
//! loader.release(orc);
//! ```
//!
//! # Feature Flags
//!
//! - `runtime-tokio`: Enable the Tokio spawner for background loads

// Core modules
pub mod asset;
pub mod host;
pub mod loader;
pub mod runtime;

// Support modules
pub mod pending;

// Error types
mod error;
pub use error::{HostError, LoadError, ParseLoaderKindError, Result};

// Re-export asset types
pub use asset::{downcast_asset, same_asset, AsAnyArc, Asset, AssetType, ErasedAsset};

// Re-export host types
pub use host::{AddressableHost, BundledHost, MockAddressables, MockBundle};

// Re-export loader types
pub use loader::{
    AssetLoader, AssetLoaderExt, LoaderKind, ManagedAssetLoader, SelectedLoader,
    SimpleAssetLoader,
};

// Re-export runtime types
pub use runtime::mock::{MockSpawnBehavior, MockSpawner};
#[cfg(feature = "runtime-tokio")]
pub use runtime::tokio_impl::TokioSpawner;
pub use runtime::AsyncSpawner;

// Re-export background loading types
pub use pending::{spawn_load, LoadState, PendingAsset};

// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
