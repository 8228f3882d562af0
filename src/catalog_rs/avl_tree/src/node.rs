/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlNode - A node in the AVL tree.

use crate::arena::NodeIndex;

/// A node of an [`AvlTree`](crate::AvlTree).
///
/// The node owns its key and payload. Children are referenced through
/// [`NodeIndex`] handles into the tree's arena and are resolved with
/// [`AvlTree::node`](crate::AvlTree::node).
#[derive(Debug, Clone)]
pub struct AvlNode<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// Height of the subtree rooted at this node. A leaf has height 1.
    pub(crate) height: u32,
    /// Subtree holding keys strictly less than `key`.
    pub(crate) left: Option<NodeIndex>,
    /// Subtree holding keys strictly greater than `key`.
    pub(crate) right: Option<NodeIndex>,
}

impl<K, V> AvlNode<K, V> {
    /// Create a detached leaf of height 1.
    pub(crate) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub const fn key(&self) -> &K {
        &self.key
    }

    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Height of the subtree rooted at this node.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Handle of the left child, if any.
    pub const fn left_index(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Handle of the right child, if any.
    pub const fn right_index(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Returns true if the node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Move a new key and payload into this node, returning the old payload.
    ///
    /// Used when the in-order successor is promoted during deletion. The
    /// caller must keep the BST ordering intact.
    pub(crate) fn replace_entry(&mut self, key: K, value: V) -> V {
        self.key = key;
        std::mem::replace(&mut self.value, value)
    }
}
