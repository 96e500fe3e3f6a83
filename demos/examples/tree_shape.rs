// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dump the quadtree shape as JSON after inserting a cluster and some straddlers.
//!
//! Run:
//! - `cargo run -p viewcull_demos --example tree_shape`

use viewcull_manager::{Bounds, ManagerConfig, SpatialIndexManager};

fn main() {
    let config = ManagerConfig::default()
        .with_root_bounds(Bounds::new(0.0, 0.0, 1000.0, 1000.0))
        .with_max_depth(5)
        .with_max_items_per_node(4);
    let mut m = SpatialIndexManager::<String>::with_config(config).expect("valid config");

    for i in 0..10 {
        m.insert(format!("row{i}"), Bounds::new(i as f64 * 50.0, 0.0, 10.0, 10.0));
    }
    // These cross the root's midlines and stay at depth 0.
    for i in 0..3 {
        m.insert(format!("straddle{i}"), Bounds::new(490.0, 100.0 + i as f64 * 200.0, 20.0, 20.0));
    }
    m.query(Bounds::new(0.0, 0.0, 500.0, 500.0));

    let info = m.debug_info();
    println!(
        "nodes={} depth={} items={} root_items={}",
        info.tree.node_count(),
        info.tree.max_depth(),
        info.tree.total_items(),
        info.tree.item_count
    );
    match serde_json::to_string_pretty(&info) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize debug info: {err}"),
    }
}
