/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Arena storage for AVL tree nodes.
//!
//! Nodes live in a single [`Slab`] and refer to their children through
//! [`NodeIndex`] handles. Rotations and splices only reassign handles, and
//! a discarded node simply hands its slot back to the slab's free list.

use std::ops::{Index, IndexMut};

use slab::Slab;

use crate::AvlNode;

/// Handle to a node stored in an [`AvlTree`](crate::AvlTree).
///
/// A handle stays valid until the node it points to is removed from the
/// tree. After that the slot may be reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Position of the node inside the arena.
    pub const fn position(self) -> usize {
        self.0
    }
}

/// Arena storage for [`AvlNode`]s.
///
/// Newtype wrapper around [`Slab<AvlNode<K, V>>`] that is indexed by
/// [`NodeIndex`] instead of raw slab keys.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K, V> {
    nodes: Slab<AvlNode<K, V>>,
}

impl<K, V> NodeArena<K, V> {
    /// Create a new empty arena.
    pub const fn new() -> Self {
        Self { nodes: Slab::new() }
    }

    /// Number of nodes currently stored in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes the arena can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Get a shared reference to a node, if the handle is occupied.
    pub fn get(&self, idx: NodeIndex) -> Option<&AvlNode<K, V>> {
        self.nodes.get(idx.0)
    }

    /// Store a node, returning its handle.
    pub fn insert(&mut self, node: AvlNode<K, V>) -> NodeIndex {
        NodeIndex(self.nodes.insert(node))
    }

    /// Remove a node from the arena, returning it.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not point to an occupied slot.
    pub fn remove(&mut self, idx: NodeIndex) -> AvlNode<K, V> {
        self.nodes.remove(idx.0)
    }

    /// Drop every node and release the slots.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Height of the subtree behind `idx`; an absent child has height 0.
    pub fn height(&self, idx: Option<NodeIndex>) -> u32 {
        idx.map_or(0, |idx| self[idx].height)
    }

    /// `height(left) - height(right)` for the node at `idx`.
    pub fn balance_factor(&self, idx: NodeIndex) -> i64 {
        let node = &self[idx];
        i64::from(self.height(node.left)) - i64::from(self.height(node.right))
    }

    /// Recompute the stored height of `idx` from its children.
    pub fn update_height(&mut self, idx: NodeIndex) {
        let node = &self[idx];
        let height = 1 + self.height(node.left).max(self.height(node.right));
        self[idx].height = height;
    }
}

impl<K, V> Default for NodeArena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Index<NodeIndex> for NodeArena<K, V> {
    type Output = AvlNode<K, V>;

    fn index(&self, idx: NodeIndex) -> &Self::Output {
        &self.nodes[idx.0]
    }
}

impl<K, V> IndexMut<NodeIndex> for NodeArena<K, V> {
    fn index_mut(&mut self, idx: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[idx.0]
    }
}
