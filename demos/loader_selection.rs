//! Loader selection example for asset_gateway
//!
//! Run with: cargo run --example loader_selection -- simple

use asset_gateway::{
    Asset, AssetLoader, AssetLoaderExt, LoaderKind, MockAddressables, MockBundle, SelectedLoader,
};
use std::sync::Arc;

struct Texture {
    name: String,
    width: u32,
    height: u32,
}

impl Asset for Texture {
    fn name(&self) -> &str {
        &self.name
    }
}

fn texture(name: &str, width: u32, height: u32) -> Arc<Texture> {
    Arc::new(Texture {
        name: name.to_string(),
        width,
        height,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let kind: LoaderKind = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("managed")
        .parse()?;

    println!("asset_gateway Loader Selection Demo");
    println!("===================================\n");

    let addressables = MockAddressables::new();
    addressables.insert("ui/logo", texture("logo", 512, 256));
    let bundle = MockBundle::new();
    bundle.insert("ui/logo", texture("logo", 512, 256));

    let loader = SelectedLoader::new(kind, addressables.clone(), bundle.clone());
    println!("Using the {} loader", loader.kind());

    futures::executor::block_on(async {
        match loader.load_async::<Texture>("ui/logo").await {
            Some(logo) => {
                println!("Loaded '{}' ({}x{})", logo.name, logo.width, logo.height);
                loader.release(Some(logo));
            }
            None => println!("Logo failed to load"),
        }

        // Both of these resolve to nothing and only log
        let _ = loader.load_async::<Texture>("").await;
        let _ = loader.load_async::<Texture>("ui/missing").await;
    });

    println!("\n{addressables:?}");
    println!("{bundle:?}");
    Ok(())
}
