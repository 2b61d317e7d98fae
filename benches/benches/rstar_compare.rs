// Copyright 2025 the Planar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use planar_index::{Backend, KdTree, Point2D, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rstar::{AABB, RTree};

fn gen_uniform_points(count: usize, extent: f64) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|_| Point2D::new(rng.random::<f64>() * extent, rng.random::<f64>() * extent))
        .collect()
}

fn to_rstar_points(v: &[Point2D]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare");
    let queries = gen_uniform_points(256, 1000.0);
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        let query_rect = Rect::from_xywh(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("planar_build_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| {
                    let tree: KdTree<usize> = pts.into_iter().zip(0..).collect();
                    black_box(tree.len());
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("rstar_build_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    black_box(tree.size());
                },
                BatchSize::LargeInput,
            )
        });

        let kd: KdTree<usize> = points.iter().copied().zip(0..).collect();
        let rt = RTree::bulk_load(to_rstar_points(&points));

        group.bench_function(format!("planar_range_n{}", n), |b| {
            b.iter(|| black_box(kd.range(query_rect).count()))
        });
        group.bench_function(format!("rstar_range_n{}", n), |b| {
            let aabb = AABB::from_corners(
                [query_rect.min_x, query_rect.min_y],
                [query_rect.max_x, query_rect.max_y],
            );
            b.iter(|| black_box(rt.locate_in_envelope(&aabb).count()))
        });

        group.bench_function(format!("planar_nearest_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(kd.nearest(*q));
                }
            })
        });
        group.bench_function(format!("rstar_nearest_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(rt.nearest_neighbor(&[q.x, q.y]));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_compare);
criterion_main!(benches);
