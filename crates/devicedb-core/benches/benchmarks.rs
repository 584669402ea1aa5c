use criterion::{criterion_group, criterion_main, Criterion};
use devicedb_core::{CatalogConfig, DeviceCatalog, DeviceSearch};
use std::hint::black_box;

fn bench_views(c: &mut Criterion) {
    let catalog = DeviceCatalog::new(CatalogConfig::default());
    let dataset = catalog.load().expect("bundled dataset");

    c.bench_function("search/codename", |b| {
        b.iter(|| dataset.search(black_box("fuxi")))
    });
    c.bench_function("search/empty_query", |b| {
        b.iter(|| dataset.search(black_box("")))
    });
    c.bench_function("brands", |b| b.iter(|| dataset.brands()));
    c.bench_function("brand_tree/xiaomi", |b| {
        b.iter(|| dataset.brand_tree(black_box("xiaomi")))
    });
}

criterion_group!(benches, bench_views);
criterion_main!(benches);
