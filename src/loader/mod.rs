//! Asset loader capability and its backends
//!
//! [`AssetLoader`] is the object-safe, type-erased contract every backend
//! implements. Callers normally go through [`AssetLoaderExt`], which adds
//! the typed `load_async::<T>` / `release::<T>` pair on top of any loader,
//! including `dyn AssetLoader`.
//!
//! Every failure resolves to `None`; the reason is only ever logged.

pub mod managed;
pub mod simple;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::asset::{downcast_asset, Asset, AssetType, ErasedAsset};
use crate::error::ParseLoaderKindError;
use crate::host::{AddressableHost, BundledHost};

pub use managed::ManagedAssetLoader;
pub use simple::SimpleAssetLoader;

/// Which backend a loader delegates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoaderKind {
    /// Addressable host with reference-counted release
    #[default]
    Managed,
    /// Bundled-resource host, release unsupported
    Simple,
}

impl fmt::Display for LoaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderKind::Managed => f.write_str("managed"),
            LoaderKind::Simple => f.write_str("simple"),
        }
    }
}

impl FromStr for LoaderKind {
    type Err = ParseLoaderKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "managed" | "addressable" | "addressables" => Ok(LoaderKind::Managed),
            "simple" | "bundled" | "resources" => Ok(LoaderKind::Simple),
            _ => Err(ParseLoaderKindError(s.to_string())),
        }
    }
}

/// Asynchronous load-by-path and release, type-erased
///
/// Implementations must not block the calling thread while the host works,
/// and must never panic or return an error to the caller: every failure
/// resolves to `None`.
#[async_trait]
pub trait AssetLoader: Send + Sync {
    /// Load the asset at `path` as `ty`
    async fn load_erased(&self, path: &str, ty: AssetType) -> Option<ErasedAsset>;

    /// Give back a handle obtained from [`AssetLoader::load_erased`]
    ///
    /// Fire-and-forget. What this does depends on the backend.
    fn release_erased(&self, asset: Option<ErasedAsset>);

    /// Backend of this loader
    fn kind(&self) -> LoaderKind;
}

/// Typed front end for every [`AssetLoader`]
///
/// # Example
/// ```ignore
/// let orc = loader.load_async::<Mesh>("enemy/orc").await;
/// loader.release(orc);
/// ```
#[async_trait]
pub trait AssetLoaderExt: AssetLoader {
    /// Load the asset at `path` as a `T`
    ///
    /// Resolves to `None` on any failure, including a host handing back
    /// an asset of another type.
    async fn load_async<T: Asset>(&self, path: &str) -> Option<Arc<T>> {
        let asset = self.load_erased(path, AssetType::of::<T>()).await?;
        downcast_asset::<T>(asset)
    }

    /// Release a typed handle; `None` is accepted and ignored by backends
    /// that track references
    fn release<T: Asset>(&self, asset: Option<Arc<T>>) {
        self.release_erased(asset.map(|asset| asset as ErasedAsset));
    }
}

impl<L: AssetLoader + ?Sized> AssetLoaderExt for L {}

/// A loader whose backend was chosen at construction
pub enum SelectedLoader<A: AddressableHost, B: BundledHost> {
    Managed(ManagedAssetLoader<A>),
    Simple(SimpleAssetLoader<B>),
}

impl<A: AddressableHost, B: BundledHost> SelectedLoader<A, B> {
    /// Build the backend named by `kind`, dropping the unused host
    pub fn new(kind: LoaderKind, addressables: A, bundle: B) -> Self {
        match kind {
            LoaderKind::Managed => SelectedLoader::Managed(ManagedAssetLoader::new(addressables)),
            LoaderKind::Simple => SelectedLoader::Simple(SimpleAssetLoader::new(bundle)),
        }
    }
}

#[async_trait]
impl<A: AddressableHost, B: BundledHost> AssetLoader for SelectedLoader<A, B> {
    async fn load_erased(&self, path: &str, ty: AssetType) -> Option<ErasedAsset> {
        match self {
            SelectedLoader::Managed(loader) => loader.load_erased(path, ty).await,
            SelectedLoader::Simple(loader) => loader.load_erased(path, ty).await,
        }
    }

    fn release_erased(&self, asset: Option<ErasedAsset>) {
        match self {
            SelectedLoader::Managed(loader) => loader.release_erased(asset),
            SelectedLoader::Simple(loader) => loader.release_erased(asset),
        }
    }

    fn kind(&self) -> LoaderKind {
        match self {
            SelectedLoader::Managed(_) => LoaderKind::Managed,
            SelectedLoader::Simple(_) => LoaderKind::Simple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{MockAddressables, MockBundle};
    use futures::executor::block_on;

    struct Tile(&'static str);

    impl Asset for Tile {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_loader_kind_parse() {
        assert_eq!("managed".parse::<LoaderKind>(), Ok(LoaderKind::Managed));
        assert_eq!(" Addressables ".parse::<LoaderKind>(), Ok(LoaderKind::Managed));
        assert_eq!("bundled".parse::<LoaderKind>(), Ok(LoaderKind::Simple));
        assert!("streaming".parse::<LoaderKind>().is_err());
    }

    #[test]
    fn test_loader_kind_display_roundtrip() {
        for kind in [LoaderKind::Managed, LoaderKind::Simple] {
            assert_eq!(kind.to_string().parse::<LoaderKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_selected_loader_dispatch() {
        let addressables = MockAddressables::new();
        let bundle = MockBundle::new();
        bundle.insert("tiles/grass", Arc::new(Tile("grass")));

        let loader = SelectedLoader::new(LoaderKind::Simple, addressables.clone(), bundle.clone());
        assert_eq!(loader.kind(), LoaderKind::Simple);

        let tile = block_on(loader.load_async::<Tile>("tiles/grass"));
        assert_eq!(tile.map(|t| t.name().to_string()), Some("grass".to_string()));
        assert_eq!(bundle.load_calls(), 1);
        assert_eq!(addressables.load_calls(), 0);
    }

    #[test]
    fn test_ext_works_through_trait_object() {
        let addressables = MockAddressables::new();
        addressables.insert("tiles/sand", Arc::new(Tile("sand")));

        let loader: Arc<dyn AssetLoader> = Arc::new(ManagedAssetLoader::new(addressables.clone()));
        let tile = block_on(loader.load_async::<Tile>("tiles/sand"));
        assert!(tile.is_some());

        loader.release(tile);
        assert_eq!(addressables.ref_count("tiles/sand"), 0);
    }
}
