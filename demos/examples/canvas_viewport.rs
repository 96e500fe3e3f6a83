// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-loop example: pan a viewport across a canvas of graph nodes.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p viewcull_demos --example canvas_viewport`

use kurbo::Rect;
use viewcull_manager::{Bounds, SpatialIndexManager};

const COLS: usize = 40;
const ROWS: usize = 25;
const NODE_W: f64 = 180.0;
const NODE_H: f64 = 90.0;
const GAP: f64 = 60.0;

fn main() {
    env_logger::init();

    let mut canvas: SpatialIndexManager = SpatialIndexManager::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            let x = col as f64 * (NODE_W + GAP) - 4000.0;
            let y = row as f64 * (NODE_H + GAP) - 1500.0;
            canvas.insert(format!("node{row}_{col}"), Bounds::new(x, y, NODE_W, NODE_H));
        }
    }
    println!("indexed {} nodes", canvas.len());

    // Three frames per camera position: the first walks the tree, the rest hit the cache.
    for pan in [0.0, 400.0, 800.0] {
        let viewport = Rect::new(pan - 960.0, -540.0, pan + 960.0, 540.0);
        for _ in 0..3 {
            let visible = canvas.query_rect(viewport);
            println!("pan={pan:>5.0} -> {} visible", visible.len());
        }
    }

    // Drag a node into view; the next frame sees it.
    canvas.update("node0_0", Bounds::new(700.0, 0.0, NODE_W, NODE_H));
    let visible = canvas.query_rect(Rect::new(-160.0, -540.0, 1760.0, 540.0));
    println!(
        "after drag: node0_0 visible = {}",
        visible.iter().any(|id| id == "node0_0")
    );

    let stats = canvas.stats();
    println!(
        "cache hits={} misses={} invalidations={}",
        stats.hits, stats.misses, stats.invalidations
    );
}
