// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Viewcull Quadtree: insert, move, query, and inspect the tree shape.

use viewcull_quadtree::{Bounds, QuadTreeConfig, SpatialIndex};

fn main() {
    let mut idx: SpatialIndex<String, usize> = SpatialIndex::new(
        Bounds::new(0.0, 0.0, 1000.0, 1000.0),
        QuadTreeConfig {
            max_depth: 5,
            max_items_per_node: 4,
        },
    );

    for i in 0..10 {
        let x = i as f64 * 50.0;
        idx.insert(format!("node{i}"), Bounds::new(x, 0.0, 10.0, 10.0), i);
    }

    // Move node3 into the far corner.
    idx.update("node3", Bounds::new(900.0, 900.0, 10.0, 10.0));

    let hits: Vec<_> = idx.query(Bounds::new(0.0, 0.0, 200.0, 200.0)).collect();
    println!("hits in top-left 200x200: {hits:?}");

    let info = idx.debug_info();
    println!(
        "nodes={} depth={} items={}",
        info.node_count(),
        info.max_depth(),
        info.total_items()
    );
}
