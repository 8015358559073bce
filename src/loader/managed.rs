//! Loader backed by a reference-counted addressable host

use std::any::Any;
use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::FutureExt;

use super::{AssetLoader, LoaderKind};
use crate::asset::{AssetType, ErasedAsset};
use crate::error::{HostError, LoadError, Result};
use crate::host::AddressableHost;

/// Addressable-backed loader
///
/// Empty paths are rejected without contacting the host. Host failures
/// and panics raised while awaiting the host are logged and resolve to
/// `None`. Releasing a handle drops exactly one host reference.
#[derive(Debug, Clone)]
pub struct ManagedAssetLoader<H: AddressableHost> {
    host: H,
}

impl<H: AddressableHost> ManagedAssetLoader<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// The wrapped host
    pub fn host(&self) -> &H {
        &self.host
    }

    async fn try_load(&self, path: &str, ty: AssetType) -> Result<ErasedAsset> {
        if path.is_empty() {
            return Err(LoadError::InvalidPath);
        }

        log::debug!("Starting async load of {} from '{path}'", ty.name());

        // Covers panics raised while building the host future as well as while polling it
        let outcome = AssertUnwindSafe(async { self.host.load_by_address(path, ty).await })
            .catch_unwind()
            .await;

        let asset = match outcome {
            Ok(Ok(asset)) => asset,
            Ok(Err(source)) => {
                return Err(LoadError::Host {
                    path: path.to_string(),
                    source,
                })
            }
            Err(payload) => {
                return Err(LoadError::Fault {
                    path: path.to_string(),
                    message: panic_message(payload.as_ref()),
                })
            }
        };

        if !ty.matches(asset.as_ref()) {
            // The host took a reference we will never hand out
            self.host.release_by_reference(&asset);
            return Err(LoadError::TypeMismatch {
                path: path.to_string(),
                expected: ty.name(),
            });
        }

        Ok(asset)
    }
}

#[async_trait]
impl<H: AddressableHost> AssetLoader for ManagedAssetLoader<H> {
    async fn load_erased(&self, path: &str, ty: AssetType) -> Option<ErasedAsset> {
        match self.try_load(path, ty).await {
            Ok(asset) => {
                log::debug!("Loaded asset '{}' from '{path}'", asset.name());
                Some(asset)
            }
            Err(err) => {
                log::error!("{err}");
                if let LoadError::Host {
                    source: HostError {
                        trace: Some(trace), ..
                    },
                    ..
                } = &err
                {
                    log::debug!("Host trace for '{path}':\n{trace}");
                }
                None
            }
        }
    }

    fn release_erased(&self, asset: Option<ErasedAsset>) {
        if let Some(asset) = asset {
            log::info!("Releasing asset '{}'", asset.name());
            self.host.release_by_reference(&asset);
        }
    }

    fn kind(&self) -> LoaderKind {
        LoaderKind::Managed
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
