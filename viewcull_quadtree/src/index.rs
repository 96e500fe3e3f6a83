// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `SpatialIndex` API: a quadtree root plus an id-keyed identity map.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::borrow::Borrow;

use crate::node::{NodeInfo, QuadItem, QuadNode, QuadTreeConfig};
use crate::types::Bounds;

/// Quadtree over a fixed universe with id-based insert, update, and remove.
///
/// Ids are unique: inserting an id that is already present replaces the old
/// entry. The tree answers queries; the identity map only tracks which ids
/// are live and where they were last placed.
///
/// The identity map is a [`BTreeMap`], so the crate needs only `alloc`: id
/// lookups ([`contains`](Self::contains), [`bounds_of`](Self::bounds_of), and the
/// existence check in every mutation) cost O(log n) rather than hashed O(1),
/// and ids need `Ord` instead of `Hash`. Removing an id additionally walks the
/// tree, since nodes do not record which child holds which id.
#[derive(Clone, Debug)]
pub struct SpatialIndex<K, P> {
    root: QuadNode<K, P>,
    ids: BTreeMap<K, Bounds>,
}

impl<K: Ord + Clone, P> SpatialIndex<K, P> {
    /// Create an empty index covering `bounds`.
    pub fn new(bounds: Bounds, config: QuadTreeConfig) -> Self {
        Self {
            root: QuadNode::new(bounds, config),
            ids: BTreeMap::new(),
        }
    }

    /// Region every entry must fit inside.
    pub fn bounds(&self) -> Bounds {
        self.root.bounds()
    }

    /// Tree shape limits.
    pub fn config(&self) -> QuadTreeConfig {
        self.root.config()
    }

    /// Root node, for inspection.
    pub fn root(&self) -> &QuadNode<K, P> {
        &self.root
    }

    /// Insert or replace the entry for `id`.
    ///
    /// Returns `false` if `bounds` does not fit inside the index universe. A
    /// previous entry for `id` is removed either way.
    pub fn insert(&mut self, id: K, bounds: Bounds, data: P) -> bool {
        if self.ids.contains_key(&id) {
            self.remove(&id);
        }
        let key = id.clone();
        if !self.root.insert(QuadItem { id, bounds, data }) {
            return false;
        }
        self.ids.insert(key, bounds);
        true
    }

    /// Remove the entry for `id`. Returns `false` if it was not present.
    pub fn remove<Q>(&mut self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.take(id).is_some()
    }

    fn take<Q>(&mut self, id: &Q) -> Option<QuadItem<K, P>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.ids.contains_key(id) {
            return None;
        }
        let item = self.root.remove(id);
        debug_assert!(item.is_some(), "identity map and tree disagree");
        if item.is_some() {
            self.ids.remove(id);
        }
        item
    }

    /// Move the entry for `id` to `bounds`, keeping its payload.
    ///
    /// Returns `false` if `id` is unknown, or if the new bounds fall outside the
    /// universe; in the latter case the entry is gone afterwards.
    pub fn update<Q>(&mut self, id: &Q, bounds: Bounds) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(item) = self.take(id) else {
            return false;
        };
        self.insert(item.id, bounds, item.data)
    }

    /// Payloads of every entry whose bounds intersect `search`, in tree order.
    pub fn query(&self, search: Bounds) -> impl Iterator<Item = &P> + '_ {
        self.query_items(search).into_iter().map(|it| &it.data)
    }

    /// Full entries whose bounds intersect `search`, in tree order.
    pub fn query_items(&self, search: Bounds) -> Vec<&QuadItem<K, P>> {
        let mut found = Vec::new();
        self.root.query(&search, &mut found);
        found
    }

    /// Whether `id` is present.
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.ids.contains_key(id)
    }

    /// Bounds `id` was last placed at.
    pub fn bounds_of<Q>(&self, id: &Q) -> Option<Bounds>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.ids.get(id).copied()
    }

    /// Iterate over live ids in key order.
    pub fn ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.ids.keys()
    }

    /// Drop every entry. The universe and configuration are kept.
    pub fn clear(&mut self) {
        self.root = QuadNode::new(self.root.bounds(), self.root.config());
        self.ids.clear();
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Snapshot of the tree's shape.
    pub fn debug_info(&self) -> NodeInfo {
        self.root.debug_info()
    }
}
