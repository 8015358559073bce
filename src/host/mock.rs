//! In-memory host implementations for testing
//!
//! Both mocks count every call they receive so tests can assert which
//! host operations a loader did or did not perform.

use super::{AddressableHost, BundledHost};
use crate::asset::{same_asset, AssetType, ErasedAsset};
use crate::error::HostError;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// What a catalog address resolves to
#[derive(Clone)]
enum CatalogEntry {
    Asset(ErasedAsset),
    Fail(HostError),
    Panic(String),
}

struct AddressablesState {
    catalog: RwLock<HashMap<String, CatalogEntry>>,
    ref_counts: Mutex<HashMap<String, usize>>,
    load_calls: AtomicU64,
    release_calls: AtomicU64,
    check_types: AtomicBool,
}

impl Default for AddressablesState {
    fn default() -> Self {
        Self {
            catalog: RwLock::new(HashMap::new()),
            ref_counts: Mutex::new(HashMap::new()),
            load_calls: AtomicU64::new(0),
            release_calls: AtomicU64::new(0),
            check_types: AtomicBool::new(true),
        }
    }
}

/// Mock addressable-asset host
///
/// Addresses are registered up front; loading an unknown address reports
/// a failure status. Clones share the same catalog and counters.
#[derive(Clone, Default)]
pub struct MockAddressables {
    state: Arc<AddressablesState>,
}

impl MockAddressables {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset under `address`
    pub fn insert(&self, address: impl Into<String>, asset: ErasedAsset) {
        self.state
            .catalog
            .write()
            .insert(address.into(), CatalogEntry::Asset(asset));
    }

    /// Make loads of `address` report a failure status
    pub fn fail_with(&self, address: impl Into<String>, error: HostError) {
        self.state
            .catalog
            .write()
            .insert(address.into(), CatalogEntry::Fail(error));
    }

    /// Make loads of `address` panic inside the host
    pub fn panic_on(&self, address: impl Into<String>, message: impl Into<String>) {
        self.state
            .catalog
            .write()
            .insert(address.into(), CatalogEntry::Panic(message.into()));
    }

    /// Toggle rejection of loads requesting the wrong asset type (on by default)
    pub fn set_type_checks(&self, enabled: bool) {
        self.state.check_types.store(enabled, Ordering::SeqCst);
    }

    /// Number of `load_by_address` calls received
    pub fn load_calls(&self) -> u64 {
        self.state.load_calls.load(Ordering::SeqCst)
    }

    /// Number of `release_by_reference` calls received
    pub fn release_calls(&self) -> u64 {
        self.state.release_calls.load(Ordering::SeqCst)
    }

    /// Outstanding references on the asset at `address`
    pub fn ref_count(&self, address: &str) -> usize {
        self.state
            .ref_counts
            .lock()
            .get(address)
            .copied()
            .unwrap_or(0)
    }
}

impl fmt::Debug for MockAddressables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockAddressables")
            .field("addresses", &self.state.catalog.read().len())
            .field("load_calls", &self.load_calls())
            .field("release_calls", &self.release_calls())
            .finish()
    }
}

#[async_trait]
impl AddressableHost for MockAddressables {
    async fn load_by_address(
        &self,
        address: &str,
        ty: AssetType,
    ) -> Result<ErasedAsset, HostError> {
        self.state.load_calls.fetch_add(1, Ordering::SeqCst);

        let entry = self.state.catalog.read().get(address).cloned();
        match entry {
            Some(CatalogEntry::Asset(asset)) => {
                if self.state.check_types.load(Ordering::SeqCst) && !ty.matches(asset.as_ref()) {
                    return Err(HostError::new(format!(
                        "asset at address '{address}' cannot be loaded as {}",
                        ty.name()
                    )));
                }
                *self
                    .state
                    .ref_counts
                    .lock()
                    .entry(address.to_string())
                    .or_insert(0) += 1;
                Ok(asset)
            }
            Some(CatalogEntry::Fail(error)) => Err(error),
            Some(CatalogEntry::Panic(message)) => panic!("{message}"),
            None => Err(HostError::new(format!("invalid key '{address}'"))),
        }
    }

    fn release_by_reference(&self, asset: &ErasedAsset) {
        self.state.release_calls.fetch_add(1, Ordering::SeqCst);

        let address = self
            .state
            .catalog
            .read()
            .iter()
            .find_map(|(address, entry)| match entry {
                CatalogEntry::Asset(known) if same_asset(known, asset) => Some(address.clone()),
                _ => None,
            });

        if let Some(address) = address {
            if let Some(count) = self.state.ref_counts.lock().get_mut(&address) {
                *count = count.saturating_sub(1);
            }
        }
    }
}

#[derive(Default)]
struct BundleState {
    catalog: RwLock<HashMap<String, ErasedAsset>>,
    load_calls: AtomicU64,
    unload_calls: AtomicU64,
}

/// Mock bundled-resource host
///
/// Loads complete immediately and return whatever lives at the path,
/// regardless of the requested type.
#[derive(Clone, Default)]
pub struct MockBundle {
    state: Arc<BundleState>,
}

impl MockBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Package an asset at `path`
    pub fn insert(&self, path: impl Into<String>, asset: ErasedAsset) {
        self.state.catalog.write().insert(path.into(), asset);
    }

    /// Number of `load_from_bundle` calls received
    pub fn load_calls(&self) -> u64 {
        self.state.load_calls.load(Ordering::SeqCst)
    }

    /// Number of `unload_unused` calls received
    pub fn unload_calls(&self) -> u64 {
        self.state.unload_calls.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for MockBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockBundle")
            .field("paths", &self.state.catalog.read().len())
            .field("load_calls", &self.load_calls())
            .field("unload_calls", &self.unload_calls())
            .finish()
    }
}

#[async_trait]
impl BundledHost for MockBundle {
    async fn load_from_bundle(&self, path: &str, _ty: AssetType) -> Option<ErasedAsset> {
        self.state.load_calls.fetch_add(1, Ordering::SeqCst);
        self.state.catalog.read().get(path).cloned()
    }

    fn unload_unused(&self) {
        self.state.unload_calls.fetch_add(1, Ordering::SeqCst);
    }
}
