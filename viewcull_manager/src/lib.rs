// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewcull Manager: cached viewport queries over a [`viewcull_quadtree`] index.
//!
//! A canvas typically asks the same question every frame: which items overlap the
//! viewport? [`SpatialIndexManager`] answers it from a quadtree of item ids and keeps
//! recent answers in a small cache keyed by the exact query rectangle.
//!
//! - Mutations ([`insert`](SpatialIndexManager::insert), [`update`](SpatialIndexManager::update),
//!   [`batch_update`](SpatialIndexManager::batch_update), [`remove`](SpatialIndexManager::remove),
//!   [`rebuild`](SpatialIndexManager::rebuild), [`clear`](SpatialIndexManager::clear)) drop the
//!   entire cache, so reads always observe the latest writes.
//! - Cached results expire after [`ManagerConfig::cache_ttl`].
//! - When [`ManagerConfig::max_cache_entries`] is reached, the oldest stored entry is evicted.
//!
//! # Example
//!
//! ```rust
//! use viewcull_manager::{ManagerConfig, SpatialIndexManager};
//! use viewcull_quadtree::Bounds;
//!
//! let config = ManagerConfig::default().with_root_bounds(Bounds::new(0.0, 0.0, 1000.0, 1000.0));
//! let mut m: SpatialIndexManager = SpatialIndexManager::with_config(config).unwrap();
//!
//! m.insert("node1".to_string(), Bounds::new(100.0, 100.0, 200.0, 100.0));
//! m.insert("node2".to_string(), Bounds::new(600.0, 600.0, 50.0, 50.0));
//!
//! let viewport = Bounds::new(0.0, 0.0, 400.0, 300.0);
//! assert_eq!(&*m.query(viewport), ["node1".to_string()]);
//!
//! // The same viewport again is served from the cache.
//! m.query(viewport);
//! assert_eq!(m.stats().hits, 1);
//!
//! // Moving a node invalidates the cache.
//! m.update("node2", Bounds::new(300.0, 200.0, 50.0, 50.0));
//! assert_eq!(m.query(viewport).len(), 2);
//! ```
//!
//! ## Logging
//!
//! Uses the [`log`] facade: `trace` for cache evictions, expiry, and invalidation,
//! `debug` for clear and rebuild, `warn` for queries with non-finite coordinates.
//! Rejected inserts are reported through return values only.
//!
//! ## Time
//!
//! Cache ages are measured with a [`Clock`]. [`SystemClock`] is the default;
//! [`ManualClock`] gives tests full control over expiry.

pub mod cache;
pub mod clock;
pub mod config;
pub mod manager;

pub use cache::{CacheStats, QueryCache, QueryKey};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{
    ConfigError, DEFAULT_CACHE_TTL, DEFAULT_MAX_CACHE_ENTRIES, DEFAULT_ROOT_BOUNDS, MAX_TREE_DEPTH,
    ManagerConfig,
};
pub use manager::{DebugInfo, SpatialIndexManager};
pub use viewcull_quadtree::Bounds;
