//! Criterion micro-benchmarks for nearest-area queries, with and without a
//! spatial index.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waymesh_bench::{grid_profile, query_points};
use waymesh_graph::AssembleConfig;

/// Benchmark: 1000 nearest-area queries over a 50x50 grid, full scan.
fn bench_nearest_full_scan_50x50(c: &mut Criterion) {
    let mesh = grid_profile(50).assemble(&AssembleConfig::default());
    let points = query_points(50, 1000);

    c.bench_function("nearest_full_scan_50x50", |b| {
        b.iter(|| {
            for &point in &points {
                black_box(mesh.nearest_area(point, false));
            }
        });
    });
}

/// Benchmark: the same 1000 queries with a quadtree attached.
fn bench_nearest_indexed_50x50(c: &mut Criterion) {
    let mesh = grid_profile(50).assemble(&AssembleConfig {
        build_index: true,
        ..Default::default()
    });
    let points = query_points(50, 1000);

    c.bench_function("nearest_indexed_50x50", |b| {
        b.iter(|| {
            for &point in &points {
                black_box(mesh.nearest_area(point, false));
            }
        });
    });
}

/// Benchmark: id and name lookups on an assembled mesh.
fn bench_lookups_50x50(c: &mut Criterion) {
    let mesh = grid_profile(50).assemble(&AssembleConfig::default());

    c.bench_function("area_by_id_50x50", |b| {
        b.iter(|| {
            for id in 1..=2500u32 {
                black_box(mesh.area(waymesh_core::AreaId(id)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_nearest_full_scan_50x50,
    bench_nearest_indexed_50x50,
    bench_lookups_50x50
);
criterion_main!(benches);
