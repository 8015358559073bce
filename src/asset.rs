//! Asset handles as seen by the loaders
//!
//! The host owns every asset. Loaders only pass `Arc` handles through,
//! either typed (`Arc<T>`) or erased (`Arc<dyn Asset>`).

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Upcasting helpers for [`Asset`], implemented for every eligible type.
pub trait AsAnyArc: Any + Send + Sync {
    /// Convert an erased handle into an `Any` handle for downcasting
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// Borrow as `Any`
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync> AsAnyArc for T {
    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A resource managed by a host asset subsystem
///
/// # Example
/// ```
/// use asset_gateway::Asset;
///
/// struct Sprite {
///     name: String,
/// }
///
/// impl Asset for Sprite {
///     fn name(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait Asset: AsAnyArc {
    /// Display name of the asset, used in diagnostics
    fn name(&self) -> &str;
}

/// Type-erased asset handle exchanged with hosts
pub type ErasedAsset = Arc<dyn Asset>;

/// Runtime descriptor of the asset type a caller asked for
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetType {
    id: TypeId,
    name: &'static str,
}

impl AssetType {
    /// Descriptor for `T`
    pub fn of<T: Asset>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether `asset` is an instance of this type
    pub fn matches(&self, asset: &dyn Asset) -> bool {
        asset.as_any().type_id() == self.id
    }
}

impl fmt::Debug for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AssetType").field(&self.name).finish()
    }
}

/// Recover a typed handle from an erased one
pub fn downcast_asset<T: Asset>(asset: ErasedAsset) -> Option<Arc<T>> {
    AsAnyArc::into_any_arc(asset).downcast::<T>().ok()
}

/// Whether two erased handles point at the same asset instance
pub fn same_asset(a: &ErasedAsset, b: &ErasedAsset) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Mesh(&'static str);

    impl Asset for Mesh {
        fn name(&self) -> &str {
            self.0
        }
    }

    struct Sound;

    impl Asset for Sound {
        fn name(&self) -> &str {
            "sound"
        }
    }

    #[test]
    fn test_asset_type_matches() {
        let mesh: ErasedAsset = Arc::new(Mesh("orc"));
        assert!(AssetType::of::<Mesh>().matches(mesh.as_ref()));
        assert!(!AssetType::of::<Sound>().matches(mesh.as_ref()));
    }

    #[test]
    fn test_downcast_roundtrip_keeps_identity() {
        let mesh = Arc::new(Mesh("orc"));
        let erased: ErasedAsset = mesh.clone();

        let typed = downcast_asset::<Mesh>(erased).expect("same type");
        assert!(Arc::ptr_eq(&typed, &mesh));
        assert_eq!(typed.name(), "orc");
    }

    #[test]
    fn test_downcast_wrong_type() {
        let erased: ErasedAsset = Arc::new(Sound);
        assert!(downcast_asset::<Mesh>(erased).is_none());
    }

    #[test]
    fn test_same_asset() {
        let a: ErasedAsset = Arc::new(Mesh("a"));
        let b: ErasedAsset = Arc::new(Mesh("a"));
        assert!(same_asset(&a, &a.clone()));
        assert!(!same_asset(&a, &b));
    }
}
