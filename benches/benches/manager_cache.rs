// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use viewcull_benches::gen_canvas_nodes;
use viewcull_manager::{ManagerConfig, SpatialIndexManager};
use viewcull_quadtree::Bounds;

fn populated(count: usize) -> SpatialIndexManager<u32> {
    let mut m = SpatialIndexManager::new();
    for (i, r) in gen_canvas_nodes(count, 10_000.0).into_iter().enumerate() {
        let _ = m.insert(i as u32, r);
    }
    m
}

fn bench_frame_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_loop");
    let viewport = Bounds::new(-960.0, -540.0, 1920.0, 1080.0);

    // Camera parked: every frame after the first is a cache hit.
    group.bench_function("static_viewport", |b| {
        let mut m = populated(1000);
        b.iter(|| black_box(m.query(viewport).len()))
    });

    // Camera panning: every frame is a new rectangle, so every frame misses.
    group.bench_function("panning_viewport", |b| {
        let mut m = populated(1000);
        let mut frame = 0u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            let dx = f64::from(frame % 1000);
            black_box(m.query(Bounds::new(viewport.x + dx, viewport.y, 1920.0, 1080.0)).len())
        })
    });

    // One node dragged per frame: each query follows a blanket invalidation.
    group.bench_function("drag_one_node", |b| {
        let mut m = populated(1000);
        let mut frame = 0u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            let dx = f64::from(frame % 100);
            let _ = m.update(&0_u32, Bounds::new(dx, 0.0, 200.0, 100.0));
            black_box(m.query(viewport).len())
        })
    });
    group.finish();
}

fn bench_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_eviction");
    let config = ManagerConfig::default().with_max_cache_entries(64);
    group.bench_function("distinct_queries_cap64", |b| {
        b.iter_batched(
            || {
                let mut m = SpatialIndexManager::<u32>::with_config(config).unwrap();
                for (i, r) in gen_canvas_nodes(500, 10_000.0).into_iter().enumerate() {
                    let _ = m.insert(i as u32, r);
                }
                m
            },
            |mut m| {
                for q in 0..256 {
                    let x = f64::from(q) * 10.0;
                    black_box(m.query(Bounds::new(x, 0.0, 800.0, 600.0)).len());
                }
                m.stats().evictions
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_batch_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_update");
    let rects = gen_canvas_nodes(1000, 10_000.0);
    group.bench_function("shift_all_1000", |b| {
        b.iter_batched(
            || populated(1000),
            |mut m| {
                let moved = rects
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (i as u32, Bounds::new(r.x + 5.0, r.y, r.width, r.height)));
                black_box(m.batch_update(moved))
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_frame_loop, bench_eviction, bench_batch_update);
criterion_main!(benches);
