//! Background loading example for asset_gateway

use asset_gateway::{
    spawn_load, Asset, AssetLoader, ManagedAssetLoader, MockAddressables, MockSpawner,
};
use std::sync::Arc;

struct Level {
    name: String,
}

impl Asset for Level {
    fn name(&self) -> &str {
        &self.name
    }
}

fn main() {
    env_logger::init();

    println!("asset_gateway Background Loading Demo");
    println!("=====================================\n");

    let host = MockAddressables::new();
    host.insert(
        "levels/forest",
        Arc::new(Level {
            name: "forest".to_string(),
        }),
    );
    let loader: Arc<dyn AssetLoader> = Arc::new(ManagedAssetLoader::new(host));

    // Deferred so the frame loop observes the in-flight state
    let spawner = MockSpawner::deferred();
    let pending = spawn_load::<Level, _, _>(loader, &spawner, "levels/forest");

    let mut frame = 0;
    while pending.is_loading() {
        frame += 1;
        println!("Frame {frame}: {pending:?}");
        if frame == 2 {
            spawner.run_pending();
        }
    }

    match pending.get() {
        Some(level) => println!("Level '{}' ready after {frame} frames", level.name()),
        None => println!("Level failed to load"),
    }
}
