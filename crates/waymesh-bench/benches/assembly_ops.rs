//! Criterion micro-benchmarks for graph assembly at varying worker counts.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waymesh_bench::grid_profile;
use waymesh_graph::AssembleConfig;

/// Benchmark: assemble a 50x50 grid (2500 areas, ~10K references) serially.
fn bench_assemble_serial_50x50(c: &mut Criterion) {
    let config = AssembleConfig {
        workers: Some(1),
        ..Default::default()
    };
    c.bench_function("assemble_serial_50x50", |b| {
        b.iter(|| {
            let mesh = grid_profile(50).assemble(&config);
            black_box(mesh.area_count());
        });
    });
}

/// Benchmark: the same assembly with auto-detected parallelism.
fn bench_assemble_parallel_50x50(c: &mut Criterion) {
    let config = AssembleConfig::default();
    c.bench_function("assemble_parallel_50x50", |b| {
        b.iter(|| {
            let mesh = grid_profile(50).assemble(&config);
            black_box(mesh.area_count());
        });
    });
}

criterion_group!(
    benches,
    bench_assemble_serial_50x50,
    bench_assemble_parallel_50x50
);
criterion_main!(benches);
