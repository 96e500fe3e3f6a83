// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewcull Quadtree: a region quadtree over axis-aligned rectangles.
//!
//! Viewcull Quadtree answers "which items overlap this rectangle" for canvases with many
//! positioned, resizable items that move often and are queried every frame.
//!
//! - Insert, update, and remove rectangles by a caller-chosen id, with a payload.
//! - Query by intersecting rectangle (closed edges: touching counts as overlapping).
//! - Inspect the tree shape with [`SpatialIndex::debug_info`].
//!
//! The universe is fixed at construction. Entries that do not fit inside it are rejected
//! with a `false` return rather than an error, so hot paths stay branch-cheap.
//!
//! # Example
//!
//! ```rust
//! use viewcull_quadtree::{Bounds, QuadTreeConfig, SpatialIndex};
//!
//! let mut idx: SpatialIndex<&str, u32> =
//!     SpatialIndex::new(Bounds::new(0.0, 0.0, 1000.0, 1000.0), QuadTreeConfig::default());
//!
//! assert!(idx.insert("a", Bounds::new(0.0, 0.0, 10.0, 10.0), 1));
//! assert!(idx.insert("b", Bounds::new(600.0, 600.0, 50.0, 50.0), 2));
//!
//! // Move `a` next to `b`.
//! assert!(idx.update("a", Bounds::new(640.0, 640.0, 10.0, 10.0)));
//!
//! let hits: Vec<u32> = idx.query(Bounds::new(620.0, 620.0, 40.0, 40.0)).copied().collect();
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! ## Tree policy
//!
//! A node holds up to [`QuadTreeConfig::max_items_per_node`] items before it tries to
//! split into four equal quadrants. Each item then moves into the first quadrant that
//! fully contains it. Items straddling a quadrant edge stay in the parent, as do items
//! arriving once [`QuadTreeConfig::max_depth`] is reached, so a node's own list may
//! grow past the configured capacity.
//!
//! ### Float semantics
//!
//! Coordinates are expected to be finite. NaN bounds never intersect anything and never
//! fit inside the universe.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod index;
pub mod node;
pub mod types;

pub use index::SpatialIndex;
pub use node::{NodeInfo, QuadItem, QuadNode, QuadTreeConfig};
pub use types::Bounds;
