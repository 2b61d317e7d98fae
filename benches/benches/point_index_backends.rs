// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use planar_index::{Backend, BruteForce, KdTree, Point2D, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn gen_uniform_points(count: usize, extent: f64) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point2D::new(rng.random::<f64>() * extent, rng.random::<f64>() * extent))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let centers: Vec<(f64, f64)> = (0..n_clusters)
        .map(|_| (rng.random::<f64>() * 2000.0, rng.random::<f64>() * 2000.0))
        .collect();
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.random::<f64>() - 0.5) * spread;
            let dy = (rng.random::<f64>() - 0.5) * spread;
            out.push(Point2D::new(cx + dx, cy + dy));
        }
    }
    out
}

/// Diagonal, sorted: every insert goes right/top, so the tree is a list.
fn gen_sorted_points(count: usize) -> Vec<Point2D> {
    (0..count)
        .map(|i| Point2D::new(i as f64, i as f64))
        .collect()
}

fn build<B: Backend<usize> + Default>(points: &[Point2D]) -> B {
    let mut b = B::default();
    for (i, p) in points.iter().copied().enumerate() {
        let _ = b.put(p, i);
    }
    b
}

fn gen_queries(count: usize, extent: f64) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| Point2D::new(rng.random::<f64>() * extent, rng.random::<f64>() * extent))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("kdtree_uniform_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| black_box(build::<KdTree<usize>>(&pts)),
                BatchSize::LargeInput,
            )
        });
    }
    let clustered = gen_clustered_points(64, 256, 40.0);
    group.bench_function("kdtree_clustered", |b| {
        b.iter(|| black_box(build::<KdTree<usize>>(&clustered)))
    });
    let sorted = gen_sorted_points(2_000);
    group.bench_function("kdtree_sorted_n2000", |b| {
        b.iter(|| black_box(build::<KdTree<usize>>(&sorted)))
    });
    group.bench_function("brute_uniform_n1000", |b| {
        let points = gen_uniform_points(1_000, 1000.0);
        b.iter(|| black_box(build::<BruteForce<usize>>(&points)))
    });
    group.finish();
}

fn bench_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("range");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        let kd = build::<KdTree<usize>>(&points);
        let brute = build::<BruteForce<usize>>(&points);
        let small = Rect::from_xywh(400.0, 400.0, 50.0, 50.0);
        let large = Rect::from_xywh(100.0, 100.0, 400.0, 400.0);
        group.bench_function(format!("kdtree_small_n{}", n), |b| {
            b.iter(|| black_box(kd.range(small).count()))
        });
        group.bench_function(format!("kdtree_large_n{}", n), |b| {
            b.iter(|| black_box(kd.range(large).count()))
        });
        group.bench_function(format!("brute_small_n{}", n), |b| {
            b.iter(|| black_box(brute.range(small).count()))
        });
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let queries = gen_queries(256, 1000.0);
    group.throughput(Throughput::Elements(queries.len() as u64));
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        let kd = build::<KdTree<usize>>(&points);
        group.bench_function(format!("kdtree_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(kd.nearest(*q));
                }
            })
        });
        if n <= 10_000 {
            let brute = build::<BruteForce<usize>>(&points);
            group.bench_function(format!("brute_n{}", n), |b| {
                b.iter(|| {
                    for q in &queries {
                        black_box(brute.nearest(*q));
                    }
                })
            });
        }
    }
    let clustered = gen_clustered_points(64, 256, 40.0);
    let kd = build::<KdTree<usize>>(&clustered);
    let far_queries = gen_queries(256, 2000.0);
    group.bench_function("kdtree_clustered", |b| {
        b.iter(|| {
            for q in &far_queries {
                black_box(kd.nearest(*q));
            }
        })
    });
    group.finish();
}

fn bench_nearest_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_k");
    let queries = gen_queries(128, 1000.0);
    let points = gen_uniform_points(50_000, 1000.0);
    let kd = build::<KdTree<usize>>(&points);
    for &k in &[1usize, 8, 32, 128] {
        group.bench_function(format!("kdtree_k{}", k), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(kd.nearest_k(*q, k));
                }
            })
        });
    }
    let small = gen_uniform_points(5_000, 1000.0);
    let kd_small = build::<KdTree<usize>>(&small);
    let brute_small = build::<BruteForce<usize>>(&small);
    group.bench_function("kdtree_k8_n5000", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(kd_small.nearest_k(*q, 8));
            }
        })
    });
    group.bench_function("brute_k8_n5000", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(brute_small.nearest_k(*q, 8));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_range,
    bench_nearest,
    bench_nearest_k,
);
criterion_main!(benches);
