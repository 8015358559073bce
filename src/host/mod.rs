//! Host asset subsystem abstraction
//!
//! The loaders in this crate are thin adapters; all resolution, bundling
//! and reference counting lives behind these traits. Engines implement
//! them over their own asset managers, tests use the in-memory mocks.

pub mod mock;

use async_trait::async_trait;

use crate::asset::{AssetType, ErasedAsset};
use crate::error::HostError;

/// Reference-counted, address-keyed asset subsystem
///
/// # Example
/// ```ignore
/// let host = MockAddressables::new();
/// host.insert("enemy/orc", Arc::new(Mesh::new("orc")));
/// let asset = host.load_by_address("enemy/orc", AssetType::of::<Mesh>()).await?;
/// host.release_by_reference(&asset);
/// ```
#[async_trait]
pub trait AddressableHost: Send + Sync {
    /// Resolve `address` to an asset of type `ty`
    ///
    /// Every successful load takes one reference on the asset.
    async fn load_by_address(&self, address: &str, ty: AssetType)
        -> Result<ErasedAsset, HostError>;

    /// Drop one reference previously taken by a load
    fn release_by_reference(&self, asset: &ErasedAsset);
}

/// Asset subsystem serving content packaged with the application
///
/// Loads may complete within the same poll.
#[async_trait]
pub trait BundledHost: Send + Sync {
    /// Look up `path`, returning whatever object lives there
    ///
    /// The returned asset is not guaranteed to be of type `ty`.
    async fn load_from_bundle(&self, path: &str, ty: AssetType) -> Option<ErasedAsset>;

    /// Global cleanup of every asset no longer referenced
    fn unload_unused(&self);
}

// Re-export implementations
pub use mock::{MockAddressables, MockBundle};
