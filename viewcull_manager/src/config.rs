// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time settings for [`SpatialIndexManager`](crate::SpatialIndexManager).

use std::time::Duration;

use viewcull_quadtree::{Bounds, QuadTreeConfig};

/// Universe used when none is given: a 20000×20000 square centred on the origin.
pub const DEFAULT_ROOT_BOUNDS: Bounds = Bounds::new(-10_000.0, -10_000.0, 20_000.0, 20_000.0);

/// Cached query rectangles kept before the oldest is evicted.
pub const DEFAULT_MAX_CACHE_ENTRIES: usize = 1000;

/// Age after which a cached query result is recomputed.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_millis(1000);

/// Deepest `max_depth` accepted by [`ManagerConfig::validate`].
///
/// Coincident items descend one level per stack frame until the depth ceiling.
pub const MAX_TREE_DEPTH: u32 = 32;

/// Manager settings: the indexed universe, tree shape, and query cache limits.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManagerConfig {
    /// Region every item must fit inside. Items outside it are rejected.
    pub root_bounds: Bounds,
    /// Subdivision limits for the quadtree.
    pub tree: QuadTreeConfig,
    /// Maximum number of cached query rectangles.
    pub max_cache_entries: usize,
    /// Maximum age of a cached result.
    pub cache_ttl: Duration,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            root_bounds: DEFAULT_ROOT_BOUNDS,
            tree: QuadTreeConfig::default(),
            max_cache_entries: DEFAULT_MAX_CACHE_ENTRIES,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl ManagerConfig {
    /// Replace the indexed universe.
    pub fn with_root_bounds(mut self, root_bounds: Bounds) -> Self {
        self.root_bounds = root_bounds;
        self
    }

    /// Replace the subdivision depth ceiling.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.tree.max_depth = max_depth;
        self
    }

    /// Replace the per-node subdivision trigger.
    pub fn with_max_items_per_node(mut self, max_items_per_node: usize) -> Self {
        self.tree.max_items_per_node = max_items_per_node;
        self
    }

    /// Replace the cache capacity.
    pub fn with_max_cache_entries(mut self, max_cache_entries: usize) -> Self {
        self.max_cache_entries = max_cache_entries;
        self
    }

    /// Replace the cache time-to-live.
    pub fn with_cache_ttl(mut self, cache_ttl: Duration) -> Self {
        self.cache_ttl = cache_ttl;
        self
    }

    /// Check the settings for values the manager cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = self.root_bounds;
        if !b.is_finite() {
            return Err(ConfigError::NonFiniteRootBounds(b));
        }
        if b.width < 0.0 || b.height < 0.0 {
            return Err(ConfigError::NegativeRootExtent {
                width: b.width,
                height: b.height,
            });
        }
        if self.tree.max_depth > MAX_TREE_DEPTH {
            return Err(ConfigError::MaxDepthTooLarge(self.tree.max_depth));
        }
        if self.tree.max_items_per_node == 0 {
            return Err(ConfigError::ZeroNodeCapacity);
        }
        if self.max_cache_entries == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }
}

/// Rejected manager settings.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A root bounds coordinate is NaN or infinite.
    #[error("root bounds must be finite, got {0:?}")]
    NonFiniteRootBounds(Bounds),
    /// The root bounds have a negative width or height.
    #[error("root bounds must have non-negative extent, got {width}x{height}")]
    NegativeRootExtent {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// The tree depth ceiling exceeds [`MAX_TREE_DEPTH`].
    #[error("max_depth must be at most {max}, got {0}", max = MAX_TREE_DEPTH)]
    MaxDepthTooLarge(u32),
    /// Nodes were allowed no items before subdividing.
    #[error("max_items_per_node must be at least 1")]
    ZeroNodeCapacity,
    /// The query cache was given no room.
    #[error("query cache must hold at least one entry")]
    ZeroCacheCapacity,
}
