/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AVL tree implementation.
//!
//! The implementation is split into sub-modules by concern:
//! - [`insert`]: Write path for new keys
//! - [`delete`]: Removal and successor promotion
//! - [`find`]: Read path (key lookups)
//! - [`rotate`]: Rotation primitives and the two rebalancing strategies
//! - [`invariants`]: Structural checks used by tests

mod delete;
mod find;
mod insert;
mod invariants;
mod rotate;

use crate::AvlNode;
use crate::arena::{NodeArena, NodeIndex};
use crate::iter::InOrderIterator;

/// A self-balancing binary search tree mapping unique keys to payloads.
///
/// Keys are ordered by their [`Ord`] implementation. After every public
/// operation the heights of the two subtrees of any node differ by at most
/// one, which bounds the height of the tree by `1.44 * log2(n + 2)`.
///
/// # Arena Storage
///
/// All nodes are stored in a [`NodeArena`]. Children are referenced by
/// [`NodeIndex`] instead of `Box<AvlNode>`, so rotations reassign handles and
/// removing a node just returns its slot to the arena's free list.
///
/// # Duplicate keys
///
/// Inserting a key that is already present replaces the payload in place
/// and hands back the previous one. The tree never holds two nodes with
/// equal keys.
///
/// # Example
///
/// ```
/// use avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(30, "thirty");
/// tree.insert(20, "twenty");
/// tree.insert(10, "ten");
///
/// // Descending insertions trigger a single right rotation.
/// assert_eq!(tree.root().map(|root| *root.key()), Some(20));
/// assert_eq!(tree.find(&10), Some(&"ten"));
///
/// assert_eq!(tree.delete(&10), Some("ten"));
/// assert_eq!(tree.find(&10), None);
/// ```
#[derive(Debug, Clone)]
pub struct AvlTree<K, V> {
    /// The root node index, `None` for an empty tree.
    root: Option<NodeIndex>,
    /// Arena holding all tree nodes.
    nodes: NodeArena<K, V>,
}

impl<K, V> AvlTree<K, V> {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self {
            root: None,
            nodes: NodeArena::new(),
        }
    }

    /// Resolve a [`NodeIndex`] to a shared reference to the node.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to a node of this tree.
    pub fn node(&self, idx: NodeIndex) -> &AvlNode<K, V> {
        &self.nodes[idx]
    }

    /// Resolve a [`NodeIndex`], returning `None` for a vacant slot.
    pub fn get_node(&self, idx: NodeIndex) -> Option<&AvlNode<K, V>> {
        self.nodes.get(idx)
    }

    /// Get a reference to the root node.
    pub fn root(&self) -> Option<&AvlNode<K, V>> {
        self.root.map(|idx| &self.nodes[idx])
    }

    /// Get the root node index.
    pub const fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    /// Number of entries in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> u32 {
        self.nodes.height(self.root)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
    }

    /// Returns an in-order iterator over all nodes of the tree.
    pub fn iter(&self) -> InOrderIterator<'_, K, V> {
        InOrderIterator::new(self)
    }

    /// Returns an iterator over the keys, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(AvlNode::key)
    }

    /// Returns an iterator over the payloads, in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(AvlNode::value)
    }

    /// Memory reserved by the node arena, in bytes.
    pub fn mem_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.nodes.capacity() * std::mem::size_of::<AvlNode<K, V>>()
    }
}

impl<K, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for AvlTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
