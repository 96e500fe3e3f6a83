// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query-result cache keyed by the exact query rectangle.
//!
//! Entries expire individually once older than the TTL and are evicted
//! oldest-stored-first when the cache is full. There is no partial invalidation:
//! any mutation of the backing index drops every entry.

use std::sync::Arc;
use std::time::Duration;

use log::trace;
use rustc_hash::FxHashMap;
use viewcull_quadtree::Bounds;

/// Cache key for one query rectangle.
///
/// Two keys are equal only when all four coordinates are bit-identical, after
/// folding `-0.0` onto `0.0`. Overlapping but different rectangles never share
/// an entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey([u64; 4]);

impl From<Bounds> for QueryKey {
    fn from(b: Bounds) -> Self {
        Self([b.x, b.y, b.width, b.height].map(|v| (v + 0.0).to_bits()))
    }
}

/// Counters describing cache behavior since creation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    /// Queries answered from the cache.
    pub hits: u64,
    /// Queries that had to walk the tree.
    pub misses: u64,
    /// Entries dropped to make room.
    pub evictions: u64,
    /// Entries found stale on lookup.
    pub expirations: u64,
    /// Times the whole cache was dropped.
    pub invalidations: u64,
}

#[derive(Clone, Debug)]
struct CacheEntry<K> {
    result: Arc<[K]>,
    stored_at: Duration,
    // Breaks ties between entries stored on the same clock reading.
    seq: u64,
}

/// Bounded, TTL-aware map from query rectangle to result ids.
#[derive(Clone, Debug)]
pub struct QueryCache<K> {
    entries: FxHashMap<QueryKey, CacheEntry<K>>,
    capacity: usize,
    ttl: Duration,
    next_seq: u64,
    stats: CacheStats,
}

impl<K> QueryCache<K> {
    /// Create an empty cache holding at most `capacity` results for up to `ttl` each.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity,
            ttl,
            next_seq: 0,
            stats: CacheStats::default(),
        }
    }

    /// Look up a fresh result, counting a hit or a miss.
    ///
    /// An entry whose age is not below the TTL is dropped and reported as a miss.
    pub fn get(&mut self, key: &QueryKey, now: Duration) -> Option<Arc<[K]>> {
        let fresh = match self.entries.get(key) {
            Some(entry) => now.saturating_sub(entry.stored_at) < self.ttl,
            None => {
                self.stats.misses += 1;
                return None;
            }
        };
        if !fresh {
            trace!("cached query {key:?} expired");
            self.entries.remove(key);
            self.stats.expirations += 1;
            self.stats.misses += 1;
            return None;
        }
        self.stats.hits += 1;
        self.entries.get(key).map(|e| Arc::clone(&e.result))
    }

    /// Store `result` under `key`, evicting the oldest entry if the cache is full.
    pub fn store(&mut self, key: QueryKey, result: Arc<[K]>, now: Duration) {
        if self.capacity == 0 {
            return;
        }
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            key,
            CacheEntry {
                result,
                stored_at: now,
                seq,
            },
        );
    }

    // Linear scan; the cache is small and eviction only happens on a miss.
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| (e.stored_at, e.seq))
            .map(|(k, _)| *k);
        if let Some(key) = oldest {
            trace!("evicting cached query {key:?}");
            self.entries.remove(&key);
            self.stats.evictions += 1;
        }
    }

    /// Drop every entry.
    pub fn invalidate(&mut self) {
        if !self.entries.is_empty() {
            trace!("invalidating {} cached queries", self.entries.len());
        }
        self.entries.clear();
        self.stats.invalidations += 1;
    }

    /// Whether a result is stored for `key`, fresh or not.
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries, including any not yet found stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum age of an entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Counters since creation.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
