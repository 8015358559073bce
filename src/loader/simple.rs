//! Loader backed by a bundled-resource host
//!
//! The host may finish the load within the same poll, so callers must not
//! rely on the returned future being deferred. Bundled assets have no
//! per-asset lifetime; only the host's global `unload_unused` frees them.

use async_trait::async_trait;

use super::{AssetLoader, LoaderKind};
use crate::asset::{AssetType, ErasedAsset};
use crate::host::BundledHost;

/// Bundled-resource loader
#[derive(Debug, Clone)]
pub struct SimpleAssetLoader<H: BundledHost> {
    host: H,
}

impl<H: BundledHost> SimpleAssetLoader<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// The wrapped host
    pub fn host(&self) -> &H {
        &self.host
    }
}

#[async_trait]
impl<H: BundledHost> AssetLoader for SimpleAssetLoader<H> {
    async fn load_erased(&self, path: &str, ty: AssetType) -> Option<ErasedAsset> {
        let asset = self.host.load_from_bundle(path, ty).await?;
        if ty.matches(asset.as_ref()) {
            Some(asset)
        } else {
            log::debug!(
                "Bundled asset '{}' at '{path}' is not a {}",
                asset.name(),
                ty.name()
            );
            None
        }
    }

    fn release_erased(&self, asset: Option<ErasedAsset>) {
        let name = asset.as_ref().map(|asset| asset.name()).unwrap_or("<none>");
        log::warn!(
            "Individual asset release is not supported by SimpleAssetLoader for asset '{name}'. \
             Use BundledHost::unload_unused for global cleanup."
        );
    }

    fn kind(&self) -> LoaderKind {
        LoaderKind::Simple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::Asset;
    use crate::host::MockBundle;
    use futures::executor::block_on;
    use std::sync::Arc;

    struct Font;

    impl Asset for Font {
        fn name(&self) -> &str {
            "font"
        }
    }

    struct Shader;

    impl Asset for Shader {
        fn name(&self) -> &str {
            "shader"
        }
    }

    #[test]
    fn test_load_matching_type() {
        let bundle = MockBundle::new();
        bundle.insert("ui/font", Arc::new(Font));
        let loader = SimpleAssetLoader::new(bundle);

        assert!(block_on(loader.load_erased("ui/font", AssetType::of::<Font>())).is_some());
    }

    #[test]
    fn test_failed_cast_is_absent() {
        let bundle = MockBundle::new();
        bundle.insert("ui/font", Arc::new(Font));
        let loader = SimpleAssetLoader::new(bundle.clone());

        assert!(block_on(loader.load_erased("ui/font", AssetType::of::<Shader>())).is_none());
        assert_eq!(bundle.load_calls(), 1);
    }

    #[test]
    fn test_empty_path_goes_to_host() {
        let bundle = MockBundle::new();
        let loader = SimpleAssetLoader::new(bundle.clone());

        assert!(block_on(loader.load_erased("", AssetType::of::<Font>())).is_none());
        assert_eq!(bundle.load_calls(), 1);
    }

    #[test]
    fn test_release_never_unloads() {
        let bundle = MockBundle::new();
        let loader = SimpleAssetLoader::new(bundle.clone());

        loader.release_erased(Some(Arc::new(Font)));
        loader.release_erased(None);
        assert_eq!(bundle.unload_calls(), 0);
    }
}
