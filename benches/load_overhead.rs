//! Benchmark: Adapter overhead on top of an immediate host

use asset_gateway::{
    Asset, AssetLoader, AssetLoaderExt, ManagedAssetLoader, MockAddressables, MockBundle,
    SimpleAssetLoader,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use futures::executor::block_on;
use std::sync::Arc;

struct Blob;

impl Asset for Blob {
    fn name(&self) -> &str {
        "blob"
    }
}

fn load_overhead_benchmark(c: &mut Criterion) {
    let addressables = MockAddressables::new();
    addressables.insert("bench/blob", Arc::new(Blob));
    let managed = ManagedAssetLoader::new(addressables);

    let bundle = MockBundle::new();
    bundle.insert("bench/blob", Arc::new(Blob));
    let simple = SimpleAssetLoader::new(bundle);

    c.bench_function("managed_load_release", |b| {
        b.iter(|| {
            let blob = block_on(managed.load_async::<Blob>(black_box("bench/blob")));
            managed.release(blob);
        })
    });

    c.bench_function("simple_load", |b| {
        b.iter(|| black_box(block_on(simple.load_async::<Blob>(black_box("bench/blob")))))
    });

    let dynamic: Box<dyn AssetLoader> = Box::new(ManagedAssetLoader::new(MockAddressables::new()));
    c.bench_function("dyn_rejected_empty_path", |b| {
        b.iter(|| black_box(block_on(dynamic.load_async::<Blob>(black_box("")))))
    });
}

criterion_group!(benches, load_overhead_benchmark);
criterion_main!(benches);
