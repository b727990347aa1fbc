//! Criterion benchmarks for the gift-wrapping hull and region samplers.
//! Focus sizes: n in {10, 100, 1000, 5000} random points.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use lpviz::geom2::rand::{draw_cloud, CloudCfg, ReplayToken};
use lpviz::geom2::{convex_hull, Bounds2, GeomCfg};
use lpviz::lp::{presets, ClipSampler, GridSampler, GridSpec, RegionSampler, VertexSampler};

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 100, 1000, 5000] {
        group.bench_with_input(BenchmarkId::new("jarvis_random", n), &n, |b, &n| {
            let cfg = CloudCfg {
                count: n,
                ..CloudCfg::default()
            };
            b.iter_batched(
                || draw_cloud(cfg, ReplayToken { seed: 43, index: 0 }),
                |pts| {
                    let _h = convex_hull(&pts);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_samplers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampler");
    let set = presets::textbook();
    let bounds = Bounds2::default();
    let geom = GeomCfg::default();
    for &step in &[0.1f64, 0.05] {
        let grid = GridSampler::new(GridSpec { bounds, step }).unwrap();
        group.bench_with_input(BenchmarkId::new("grid_textbook", step), &step, |b, _| {
            b.iter(|| convex_hull(&grid.sample(&set)))
        });
    }
    group.bench_function("vertices_textbook", |b| {
        let s = VertexSampler { bounds, cfg: geom };
        b.iter(|| convex_hull(&s.sample(&set)))
    });
    group.bench_function("clip_textbook", |b| {
        let s = ClipSampler { bounds, cfg: geom };
        b.iter(|| convex_hull(&s.sample(&set)))
    });
    group.finish();
}

criterion_group!(benches, bench_hull, bench_samplers);
criterion_main!(benches);
