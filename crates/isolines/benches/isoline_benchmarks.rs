//! Benchmarks for isoline extraction on synthetic meshes.
//!
//! Run with: cargo bench --package isolines --bench isoline_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use isoline_common::{GroupPreset, IsolineConfig, Mesh, Point};
use isolines::{
    collect_crossings, generate_isoline_group, regenerate_standard_groups, smooth_path,
    stitch_path, Band, CrossingStats, IsolinesCollection, TerrainData,
};
use test_utils::{create_grid_mesh, create_hill_field, create_precipitation_field, SyntheticMesh};

fn build_mesh(synthetic: &SyntheticMesh) -> Mesh {
    Mesh::from_pairs(&synthetic.points, synthetic.neighbors.clone())
        .expect("synthetic mesh is well formed")
}

/// Hill field with random noise (more crossings per band).
fn generate_noisy_hill(synthetic: &SyntheticMesh) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    create_hill_field(synthetic, 0.0, 500.0)
        .into_iter()
        .map(|v| v + rng.gen_range(-5.0..5.0))
        .collect()
}

/// Scattered points along a circle, shuffled.
fn generate_ring(n: usize) -> Vec<Point> {
    let mut rng = rand::thread_rng();
    let mut points: Vec<Point> = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            Point::new(angle.cos() * 100.0, angle.sin() * 100.0)
        })
        .collect();
    for i in (1..points.len()).rev() {
        let j = rng.gen_range(0..=i);
        points.swap(i, j);
    }
    points
}

// =============================================================================
// CROSSING COLLECTION BENCHMARKS
// =============================================================================

fn bench_collect_crossings(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_crossings");

    for size in [64, 128, 256] {
        let synthetic = create_grid_mesh(size, size, 1.0);
        let mesh = build_mesh(&synthetic);
        let field = generate_noisy_hill(&synthetic);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::new("single_band", format!("{}x{}", size, size)),
            &field,
            |b, field| {
                b.iter(|| {
                    let mut stats = CrossingStats::default();
                    collect_crossings(black_box(field), &mesh, Band::new(250.0, 20.0), &mut stats)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// STITCHING AND SMOOTHING BENCHMARKS
// =============================================================================

fn bench_stitch_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("stitch_path");

    for n in [100, 500, 2000] {
        let points = generate_ring(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("ring", n), &points, |b, points| {
            b.iter(|| stitch_path(black_box(points)));
        });
    }

    group.finish();
}

fn bench_smooth_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_path");

    for n in [100, 1000, 10000] {
        let path = generate_ring(n);
        group.bench_with_input(BenchmarkId::new("factor_0.2", n), &path, |b, path| {
            b.iter(|| smooth_path(black_box(path), 0.2, 2));
        });
    }

    group.finish();
}

// =============================================================================
// FULL PIPELINE BENCHMARKS
// =============================================================================

fn bench_generate_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_isoline_group");
    group.sample_size(20);

    let synthetic = create_grid_mesh(128, 128, 1.0);
    let mesh = build_mesh(&synthetic);
    let field = generate_noisy_hill(&synthetic);

    for interval in [100.0, 50.0, 20.0] {
        let config = IsolineConfig::with_interval(interval);
        group.bench_with_input(
            BenchmarkId::new("noisy_hill_128", interval),
            &config,
            |b, config| {
                b.iter(|| generate_isoline_group(black_box(&field), &mesh, config));
            },
        );
    }

    group.finish();
}

fn bench_standard_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("regenerate_standard_groups");
    group.sample_size(10);

    let synthetic = create_grid_mesh(128, 128, 1.0);
    let terrain = TerrainData::new(build_mesh(&synthetic), generate_noisy_hill(&synthetic))
        .and_then(|t| t.with_precipitation(create_precipitation_field(&synthetic, 42)))
        .expect("synthetic terrain is well formed");

    group.throughput(Throughput::Elements(GroupPreset::standard().len() as u64));
    group.bench_function("grid_128", |b| {
        b.iter(|| {
            let mut collection = IsolinesCollection::new();
            regenerate_standard_groups(&mut collection, black_box(&terrain))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_collect_crossings,
    bench_stitch_path,
    bench_smooth_path,
    bench_generate_group,
    bench_standard_groups,
);
criterion_main!(benches);
