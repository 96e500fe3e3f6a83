// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use viewcull_benches::{gen_canvas_nodes, gen_clustered_rects, gen_grid_rects, scan};
use viewcull_quadtree::{Bounds, QuadTreeConfig, SpatialIndex};

const UNIVERSE: Bounds = Bounds::new(-10_000.0, -10_000.0, 20_000.0, 20_000.0);

fn build(rects: &[Bounds], config: QuadTreeConfig) -> SpatialIndex<u32, u32> {
    let mut idx = SpatialIndex::new(UNIVERSE, config);
    for (i, r) in rects.iter().copied().enumerate() {
        let id = i as u32;
        let _ = idx.insert(id, r, id);
    }
    idx
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| black_box(build(&rects, QuadTreeConfig::default()).len()))
        });
    }
    let rects = gen_clustered_rects(16, 256, 128.0);
    group.bench_function("clustered", |b| {
        b.iter(|| black_box(build(&rects, QuadTreeConfig::default()).len()))
    });
    group.finish();
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_query");
    let rects = gen_canvas_nodes(1000, 10_000.0);
    let idx = build(&rects, QuadTreeConfig::default());
    let viewports: Vec<Bounds> = (0..100)
        .map(|i| {
            let dx = f64::from(i % 10) * 500.0;
            let dy = f64::from(i / 10) * 300.0;
            Bounds::new(-960.0 + dx, -540.0 + dy, 1920.0, 1080.0)
        })
        .collect();

    group.bench_function("quadtree", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for v in &viewports {
                total += idx.query(*v).count();
            }
            black_box(total)
        })
    });
    group.bench_function("linear_scan", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for v in &viewports {
                total += scan(&rects, v);
            }
            black_box(total)
        })
    });
    group.finish();
}

fn bench_depth_tuning(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_tuning");
    let rects = gen_canvas_nodes(4000, 16_000.0);
    let viewport = Bounds::new(-960.0, -540.0, 1920.0, 1080.0);
    for &(max_depth, max_items_per_node) in &[(4u32, 4usize), (6, 4), (8, 4), (6, 16)] {
        let idx = build(
            &rects,
            QuadTreeConfig {
                max_depth,
                max_items_per_node,
            },
        );
        group.bench_function(format!("d{}_c{}", max_depth, max_items_per_node), |b| {
            b.iter(|| black_box(idx.query(viewport).count()))
        });
    }
    group.finish();
}

fn bench_move_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_move_churn");
    let rects = gen_canvas_nodes(2000, 10_000.0);
    group.bench_function("update_all_small_delta", |b| {
        b.iter_batched(
            || build(&rects, QuadTreeConfig::default()),
            |mut idx| {
                for (j, r) in rects.iter().enumerate() {
                    let dx = (j % 5) as f64 - 2.0;
                    let dy = ((j * 7) % 5) as f64 - 2.0;
                    let moved = Bounds::new(r.x + dx, r.y + dy, r.width, r.height);
                    let _ = idx.update(&(j as u32), moved);
                }
                black_box(idx.len())
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_viewport,
    bench_depth_tuning,
    bench_move_churn,
);
criterion_main!(benches);
