//! Criterion micro-benchmarks for the periodic search engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use periscope_bench::{frame_cloud, probe_points};
use periscope_search::PeriodicSearch;

const BOX: [f64; 6] = [50.0, 50.0, 50.0, 90.0, 90.0, 90.0];
const LENGTHS: [f64; 3] = [50.0, 50.0, 50.0];

/// Benchmark: interior query (single image) on a 10K-point engine.
fn bench_search_interior(c: &mut Criterion) {
    let mut engine = PeriodicSearch::new(BOX).unwrap();
    engine.set_coords(&frame_cloud(3, 10_000, LENGTHS)).unwrap();

    c.bench_function("search_interior_10k", |b| {
        b.iter(|| {
            engine.search(black_box(&[25.0, 25.0, 25.0]), 5.0).unwrap();
            black_box(engine.get_indices());
        });
    });
}

/// Benchmark: vertex query (eight images) on a 10K-point engine.
fn bench_search_vertex(c: &mut Criterion) {
    let mut engine = PeriodicSearch::new(BOX).unwrap();
    engine.set_coords(&frame_cloud(3, 10_000, LENGTHS)).unwrap();

    c.bench_function("search_vertex_10k", |b| {
        b.iter(|| {
            engine.search(black_box(&[1.0, 1.0, 1.0]), 5.0).unwrap();
            black_box(engine.get_indices());
        });
    });
}

/// Benchmark: one full frame, a coordinate rebuild followed by a probe sweep.
fn bench_per_frame_rebuild(c: &mut Criterion) {
    let mut engine = PeriodicSearch::new(BOX).unwrap();
    let frames: Vec<_> = (0..4u64).map(|s| frame_cloud(s, 5_000, LENGTHS)).collect();
    let probes = probe_points(LENGTHS);

    c.bench_function("per_frame_rebuild_5k", |b| {
        let mut frame = 0usize;
        b.iter(|| {
            engine.set_coords(&frames[frame % frames.len()]).unwrap();
            for probe in &probes {
                engine.search(probe, 4.0).unwrap();
                black_box(engine.get_indices());
            }
            frame += 1;
        });
    });
}

/// Benchmark: find_centers image enumeration near a vertex.
fn bench_find_centers(c: &mut Criterion) {
    let engine = PeriodicSearch::new(BOX).unwrap();

    c.bench_function("find_centers_vertex", |b| {
        b.iter(|| {
            let centers = engine.find_centers(black_box(&[1.0, 1.0, 1.0]), 5.0).unwrap();
            black_box(centers);
        });
    });
}

criterion_group!(
    benches,
    bench_search_interior,
    bench_search_vertex,
    bench_per_frame_rebuild,
    bench_find_centers
);
criterion_main!(benches);
