// Copyright 2025 the Viewcull Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quadtree nodes: insertion with overflow subdivision, removal by id, and
//! rectangle queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;

use crate::types::Bounds;

/// Shape limits shared by every node of one tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadTreeConfig {
    /// Deepest level a node may subdivide into. The root is depth `0`.
    pub max_depth: u32,
    /// Item count at which an undivided node tries to subdivide.
    ///
    /// This is a trigger, not a cap: items that straddle quadrant boundaries,
    /// or that arrive once `max_depth` is reached, stay in the node regardless.
    pub max_items_per_node: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            max_items_per_node: 4,
        }
    }
}

/// An entry stored in the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadItem<K, P> {
    /// Caller-chosen identifier.
    pub id: K,
    /// Rectangle the entry occupies.
    pub bounds: Bounds,
    /// Caller payload.
    pub data: P,
}

/// One node of a region quadtree.
///
/// A node owns its region, the items that fit in it but not in a single child,
/// and, once divided, exactly four children tiling its region.
#[derive(Clone, Debug)]
pub struct QuadNode<K, P> {
    bounds: Bounds,
    depth: u32,
    config: QuadTreeConfig,
    items: Vec<QuadItem<K, P>>,
    children: Option<Box<[Self; 4]>>,
}

impl<K, P> QuadNode<K, P> {
    /// Create an empty root node covering `bounds`.
    pub fn new(bounds: Bounds, config: QuadTreeConfig) -> Self {
        Self::with_depth(bounds, 0, config)
    }

    fn with_depth(bounds: Bounds, depth: u32, config: QuadTreeConfig) -> Self {
        Self {
            bounds,
            depth,
            config,
            items: Vec::new(),
            children: None,
        }
    }

    /// Region covered by this node.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Depth of this node; the root is `0`.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Configuration inherited from the root.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Whether this node has been split into four children.
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Items held directly by this node (not by its children).
    pub fn items(&self) -> &[QuadItem<K, P>] {
        &self.items
    }

    /// Children in top-left, top-right, bottom-left, bottom-right order.
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// Insert an item, returning `false` (and dropping it) if it does not fit
    /// inside this node's bounds.
    pub fn insert(&mut self, item: QuadItem<K, P>) -> bool {
        if !self.bounds.contains(&item.bounds) {
            return false;
        }
        self.insert_contained(item);
        true
    }

    fn insert_contained(&mut self, item: QuadItem<K, P>) {
        if self.children.is_none() {
            if self.items.len() < self.config.max_items_per_node {
                self.items.push(item);
                return;
            }
            if self.depth < self.config.max_depth {
                self.subdivide();
            }
        }
        let item = match self.push_into_child(item) {
            Ok(()) => return,
            Err(item) => item,
        };
        // Straddles a quadrant boundary, or no depth left to split into.
        self.items.push(item);
    }

    /// Hand `item` to the first child that fully contains it.
    fn push_into_child(&mut self, item: QuadItem<K, P>) -> Result<(), QuadItem<K, P>> {
        let Some(children) = self.children.as_deref_mut() else {
            return Err(item);
        };
        match children
            .iter_mut()
            .find(|child| child.bounds.contains(&item.bounds))
        {
            Some(child) => {
                child.insert_contained(item);
                Ok(())
            }
            None => Err(item),
        }
    }

    fn subdivide(&mut self) {
        if self.children.is_some() {
            return;
        }
        let depth = self.depth + 1;
        let config = self.config;
        let [tl, tr, bl, br] = self.bounds.quadrants();
        self.children = Some(Box::new([
            Self::with_depth(tl, depth, config),
            Self::with_depth(tr, depth, config),
            Self::with_depth(bl, depth, config),
            Self::with_depth(br, depth, config),
        ]));

        let pending = core::mem::take(&mut self.items);
        for item in pending {
            if let Err(item) = self.push_into_child(item) {
                self.items.push(item);
            }
        }
    }

    /// Remove the item with `id` from this subtree, returning it if found.
    ///
    /// Scans this node's own items first, then each child in order.
    pub fn remove<Q>(&mut self, id: &Q) -> Option<QuadItem<K, P>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        if let Some(pos) = self.items.iter().position(|it| it.id.borrow() == id) {
            return Some(self.items.remove(pos));
        }
        self.children
            .as_deref_mut()?
            .iter_mut()
            .find_map(|child| child.remove(id))
    }

    /// Append every item in this subtree whose bounds intersect `search` to `found`.
    ///
    /// Results come in traversal order: a node's own items, then its children
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn query<'a>(&'a self, search: &Bounds, found: &mut Vec<&'a QuadItem<K, P>>) {
        if !self.bounds.intersects(search) {
            return;
        }
        found.extend(self.items.iter().filter(|it| it.bounds.intersects(search)));
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.query(search, found);
            }
        }
    }

    /// Number of items stored in this subtree.
    pub fn len(&self) -> usize {
        self.items.len()
            + self
                .children
                .as_deref()
                .map_or(0, |c| c.iter().map(Self::len).sum())
    }

    /// Whether this subtree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of this subtree's shape for diagnostics.
    pub fn debug_info(&self) -> NodeInfo {
        NodeInfo {
            bounds: self.bounds,
            depth: self.depth,
            item_count: self.items.len(),
            divided: self.is_divided(),
            children: self
                .children
                .as_deref()
                .map(|c| c.iter().map(Self::debug_info).collect())
                .unwrap_or_default(),
        }
    }
}

/// Recursive shape of a subtree, as returned by [`QuadNode::debug_info`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeInfo {
    /// Region of the node.
    pub bounds: Bounds,
    /// Depth of the node.
    pub depth: u32,
    /// Items held directly by the node.
    pub item_count: usize,
    /// Whether the node has children.
    pub divided: bool,
    /// Child snapshots; empty unless `divided`.
    pub children: Vec<Self>,
}

impl NodeInfo {
    /// Total number of nodes in this snapshot, including itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Deepest depth reached in this snapshot.
    pub fn max_depth(&self) -> u32 {
        self.children
            .iter()
            .map(Self::max_depth)
            .max()
            .unwrap_or(self.depth)
    }

    /// Total items held across the snapshot.
    pub fn total_items(&self) -> usize {
        self.item_count + self.children.iter().map(Self::total_items).sum::<usize>()
    }
}
