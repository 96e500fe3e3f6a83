// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caching facade: a [`SpatialIndex`] of ids plus a [`QueryCache`] of recent results.

use std::borrow::Borrow;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace, warn};
use viewcull_quadtree::{Bounds, NodeInfo, SpatialIndex};

use crate::cache::{CacheStats, QueryCache, QueryKey};
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, ManagerConfig};

/// Viewport query service over a quadtree of item ids.
///
/// Every mutation (insert, update, remove, batch update, rebuild, clear) drops the
/// whole query cache, so a query issued after a mutation always reflects it.
/// Identical query rectangles issued between mutations are served from the cache
/// until their entry outlives the configured TTL.
///
/// Single-threaded: it holds no locks, so share it across threads only behind
/// external synchronization.
#[derive(Debug)]
pub struct SpatialIndexManager<K = String, C = SystemClock> {
    index: SpatialIndex<K, K>,
    cache: QueryCache<K>,
    config: ManagerConfig,
    clock: C,
    rebuilds: u64,
    last_result_len: usize,
}

impl<K: Ord + Clone> SpatialIndexManager<K, SystemClock> {
    /// Create a manager with [`ManagerConfig::default`].
    pub fn new() -> Self {
        Self::build(ManagerConfig::default(), SystemClock::new())
    }

    /// Create a manager with the given settings.
    pub fn with_config(config: ManagerConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<K: Ord + Clone> Default for SpatialIndexManager<K, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, C: Clock> SpatialIndexManager<K, C> {
    /// Create a manager that ages cache entries with `clock`.
    pub fn with_clock(config: ManagerConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, clock))
    }

    fn build(config: ManagerConfig, clock: C) -> Self {
        Self {
            index: SpatialIndex::new(config.root_bounds, config.tree),
            cache: QueryCache::new(config.max_cache_entries, config.cache_ttl),
            config,
            clock,
            rebuilds: 0,
            last_result_len: 0,
        }
    }

    /// Insert or replace `id` at `bounds`.
    ///
    /// Returns `false` if `bounds` lies outside the root bounds; the item is then
    /// absent, even if an earlier entry for `id` existed.
    pub fn insert(&mut self, id: K, bounds: Bounds) -> bool {
        let ok = self.index.insert(id.clone(), bounds, id);
        self.cache.invalidate();
        ok
    }

    /// Move `id` to `bounds`. Returns `false` if `id` is unknown or the new bounds
    /// lie outside the root bounds.
    pub fn update<Q>(&mut self, id: &Q, bounds: Bounds) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let ok = self.index.update(id, bounds);
        self.cache.invalidate();
        ok
    }

    /// Apply many updates, invalidating the cache once at the end.
    ///
    /// Unknown ids are skipped. Returns how many updates succeeded; the cache is
    /// dropped even when that is zero.
    pub fn batch_update<I, T>(&mut self, updates: I) -> usize
    where
        I: IntoIterator<Item = (T, Bounds)>,
        T: Borrow<K>,
    {
        let mut applied = 0;
        for (id, bounds) in updates {
            let id: &K = id.borrow();
            if self.index.update(id, bounds) {
                applied += 1;
            }
        }
        self.cache.invalidate();
        applied
    }

    /// Remove `id`. Returns `false` if it was not present.
    pub fn remove<Q>(&mut self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let ok = self.index.remove(id);
        self.cache.invalidate();
        ok
    }

    /// Replace the whole contents with `items`, invalidating the cache once.
    ///
    /// Returns how many items fit inside the root bounds.
    pub fn rebuild<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = (K, Bounds)>,
    {
        self.index.clear();
        let mut accepted = 0;
        for (id, bounds) in items {
            if self.index.insert(id.clone(), bounds, id) {
                accepted += 1;
            }
        }
        self.cache.invalidate();
        self.rebuilds += 1;
        debug!("rebuilt spatial index with {accepted} items");
        accepted
    }

    /// Ids of every item whose bounds intersect `bounds`.
    ///
    /// Repeating the exact same rectangle before any mutation and within the TTL
    /// returns the cached result without touching the tree. Rectangles with
    /// non-finite coordinates match nothing and are not cached.
    pub fn query(&mut self, bounds: Bounds) -> Arc<[K]> {
        if !bounds.is_finite() {
            warn!("rejecting spatial query with non-finite bounds {bounds:?}");
            self.last_result_len = 0;
            return Arc::from([]);
        }
        let key = QueryKey::from(bounds);
        let now = self.clock.now();
        if let Some(hit) = self.cache.get(&key, now) {
            self.last_result_len = hit.len();
            return hit;
        }
        let result: Arc<[K]> = self.index.query(bounds).cloned().collect();
        trace!("spatial query {bounds:?} matched {} items", result.len());
        self.cache.store(key, Arc::clone(&result), now);
        self.last_result_len = result.len();
        result
    }

    /// Ids of every item whose bounds contain the point, edges included.
    pub fn query_point(&mut self, x: f64, y: f64) -> Arc<[K]> {
        self.query(Bounds::point(x, y))
    }

    /// Ids of every item whose bounds intersect the square enclosing the circle of
    /// `radius` around `(x, y)`.
    ///
    /// This is a candidate set: corners of the square beyond the circle still match.
    pub fn query_radius(&mut self, x: f64, y: f64, radius: f64) -> Arc<[K]> {
        self.query(Bounds::from_point_radius(x, y, radius))
    }

    /// [`query`](Self::query) with a Kurbo rectangle.
    pub fn query_rect(&mut self, rect: kurbo::Rect) -> Arc<[K]> {
        self.query(Bounds::from(rect))
    }

    /// Remove every item and drop the cache.
    pub fn clear(&mut self) {
        debug!("clearing spatial index of {} items", self.index.len());
        self.index.clear();
        self.cache.invalidate();
    }

    /// Whether `id` is present.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.contains(id)
    }

    /// Bounds `id` currently occupies.
    pub fn bounds_of<Q>(&self, id: &Q) -> Option<Bounds>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.bounds_of(id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Settings the manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Cache counters since creation.
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Tree shape and cache counters, for diagnostics.
    pub fn debug_info(&self) -> DebugInfo {
        DebugInfo {
            tree: self.index.debug_info(),
            item_count: self.index.len(),
            cache_entries: self.cache.len(),
            max_cache_entries: self.cache.capacity(),
            cache_ttl: self.cache.ttl(),
            stats: self.cache.stats(),
            rebuilds: self.rebuilds,
            last_result_len: self.last_result_len,
        }
    }
}

/// Diagnostic snapshot returned by [`SpatialIndexManager::debug_info`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugInfo {
    /// Recursive tree shape.
    pub tree: NodeInfo,
    /// Live items.
    pub item_count: usize,
    /// Cached query rectangles.
    pub cache_entries: usize,
    /// Cache capacity.
    pub max_cache_entries: usize,
    /// Cache time-to-live.
    pub cache_ttl: Duration,
    /// Cache counters.
    pub stats: CacheStats,
    /// Calls to [`SpatialIndexManager::rebuild`] since creation.
    pub rebuilds: u64,
    /// Ids returned by the most recent query, cached or not.
    pub last_result_len: usize,
}
