// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared input generators for the Viewcull benchmarks.

use viewcull_quadtree::Bounds;

/// Square `n`×`n` grid of `cell`-sized rectangles starting at the origin.
pub fn gen_grid_rects(n: usize, cell: f64) -> Vec<Bounds> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Bounds::new(x as f64 * cell, y as f64 * cell, cell, cell));
        }
    }
    out
}

/// Deterministic xorshift generator so runs are comparable.
#[derive(Clone, Debug)]
pub struct Rng(u64);

impl Rng {
    /// Seed the generator. A zero seed would stay zero forever, so it is nudged.
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    /// Next raw value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

/// Node-sized rectangles scattered over a `span`×`span` square centred on the origin,
/// like a graph canvas.
pub fn gen_canvas_nodes(count: usize, span: f64) -> Vec<Bounds> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x = (rng.next_f64() - 0.5) * span;
            let y = (rng.next_f64() - 0.5) * span;
            let w = 150.0 + rng.next_f64() * 100.0;
            let h = 100.0 + rng.next_f64() * 50.0;
            Bounds::new(x, y, w, h)
        })
        .collect()
}

/// Dense clusters of small rectangles, the worst case for quadrant straddling.
pub fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Bounds> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let centers: Vec<(f64, f64)> = (0..n_clusters)
        .map(|_| (rng.next_f64() * 2000.0, rng.next_f64() * 2000.0))
        .collect();
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Bounds::new(cx + dx, cy + dy, 12.0, 12.0));
        }
    }
    out
}

/// Linear-scan baseline: how many rectangles intersect `search`.
pub fn scan(rects: &[Bounds], search: &Bounds) -> usize {
    rects.iter().filter(|r| r.intersects(search)).count()
}
