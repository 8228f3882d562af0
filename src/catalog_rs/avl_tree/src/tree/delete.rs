/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Removal path.
//!
//! A node with at most one child is spliced out directly. A node with two
//! children keeps its slot: its in-order successor is detached from the
//! right subtree and moves its key and payload into it.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::AvlTree;
use crate::arena::{NodeArena, NodeIndex};

impl<K: Ord, V> AvlTree<K, V> {
    /// Remove `key` from the tree, returning its payload.
    ///
    /// Returns `None`, and leaves the tree untouched, if the key is absent.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let root = self.root?;
        let mut removed = None;
        self.root = Self::node_delete(&mut self.nodes, root, key, &mut removed);

        #[cfg(feature = "unittest")]
        self.check_tree_invariants();

        removed
    }

    /// Recursive delete implementation.
    ///
    /// Returns the root of the subtree after the removal and rebalancing,
    /// `None` if the subtree became empty.
    fn node_delete<Q>(
        nodes: &mut NodeArena<K, V>,
        node_idx: NodeIndex,
        key: &Q,
        removed: &mut Option<V>,
    ) -> Option<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match key.cmp(nodes[node_idx].key.borrow()) {
            Ordering::Less => {
                if let Some(left) = nodes[node_idx].left {
                    nodes[node_idx].left = Self::node_delete(nodes, left, key, removed);
                }
            }
            Ordering::Greater => {
                if let Some(right) = nodes[node_idx].right {
                    nodes[node_idx].right = Self::node_delete(nodes, right, key, removed);
                }
            }
            Ordering::Equal => match (nodes[node_idx].left, nodes[node_idx].right) {
                (None, child) | (child, None) => {
                    let node = nodes.remove(node_idx);
                    *removed = Some(node.value);
                    return child;
                }
                (Some(_), Some(right)) => {
                    let (new_right, successor_idx) = Self::detach_min(nodes, right);
                    nodes[node_idx].right = new_right;
                    let successor = nodes.remove(successor_idx);
                    *removed = Some(nodes[node_idx].replace_entry(successor.key, successor.value));
                }
            },
        }

        if removed.is_none() {
            // Key not found below this node: the subtree is unchanged.
            return Some(node_idx);
        }
        Some(Self::rebalance_after_delete(nodes, node_idx))
    }

    /// Unlink the node with the smallest key from the subtree at `node_idx`.
    ///
    /// The detached node stays in the arena so the caller can move its
    /// entry out. Returns the new root of the remaining subtree and the
    /// handle of the detached node.
    fn detach_min(
        nodes: &mut NodeArena<K, V>,
        node_idx: NodeIndex,
    ) -> (Option<NodeIndex>, NodeIndex) {
        match nodes[node_idx].left {
            // The minimum has no left child, so its right child (if any)
            // takes its place.
            None => (nodes[node_idx].right.take(), node_idx),
            Some(left) => {
                let (new_left, min_idx) = Self::detach_min(nodes, left);
                nodes[node_idx].left = new_left;
                (Some(Self::rebalance_after_delete(nodes, node_idx)), min_idx)
            }
        }
    }
}
