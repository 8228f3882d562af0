/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Rotation primitives and rebalancing.
//!
//! Both write paths recompute the height and balance factor of every node
//! on the way back up. They differ in how they pick between a single and a
//! double rotation: insertion compares the freshly inserted key with the
//! heavy child's key, deletion looks at the sign of the heavy child's own
//! balance factor since the key that caused the imbalance is gone.

use std::cmp::Ordering;

use super::AvlTree;
use crate::arena::{NodeArena, NodeIndex};

impl<K, V> AvlTree<K, V> {
    /// Rotate the subtree rooted at `z` to the right.
    ///
    /// ```text
    ///         z                y
    ///        / \              / \
    ///       y   T3    ->    T1   z
    ///      / \                  / \
    ///    T1   T2              T2   T3
    /// ```
    ///
    /// Returns the new subtree root (`y`).
    pub(super) fn rotate_right(nodes: &mut NodeArena<K, V>, z: NodeIndex) -> NodeIndex {
        let y = nodes[z]
            .left
            .expect("right rotation requires a left child");
        let t2 = nodes[y].right;

        nodes[y].right = Some(z);
        nodes[z].left = t2;

        // `z` is now below `y`, so it has to be updated first.
        nodes.update_height(z);
        nodes.update_height(y);
        y
    }

    /// Rotate the subtree rooted at `z` to the left.
    ///
    /// ```text
    ///      z                    y
    ///     / \                  / \
    ///   T1   y       ->       z   T3
    ///       / \              / \
    ///     T2   T3          T1   T2
    /// ```
    ///
    /// Returns the new subtree root (`y`).
    pub(super) fn rotate_left(nodes: &mut NodeArena<K, V>, z: NodeIndex) -> NodeIndex {
        let y = nodes[z]
            .right
            .expect("left rotation requires a right child");
        let t2 = nodes[y].left;

        nodes[y].left = Some(z);
        nodes[z].right = t2;

        nodes.update_height(z);
        nodes.update_height(y);
        y
    }

    /// Rebalance `node_idx` after a new node was inserted in its subtree.
    ///
    /// `inserted` is the handle of the new leaf; its key decides between the
    /// single and the double rotation. Returns the root of the (possibly
    /// rotated) subtree.
    pub(super) fn rebalance_after_insert(
        nodes: &mut NodeArena<K, V>,
        node_idx: NodeIndex,
        inserted: NodeIndex,
    ) -> NodeIndex
    where
        K: Ord,
    {
        nodes.update_height(node_idx);
        let balance = nodes.balance_factor(node_idx);

        if balance > 1 {
            let left = nodes[node_idx]
                .left
                .expect("left-heavy node must have a left child");
            if nodes[inserted].key.cmp(&nodes[left].key) == Ordering::Greater {
                nodes[node_idx].left = Some(Self::rotate_left(nodes, left));
            }
            return Self::rotate_right(nodes, node_idx);
        }

        if balance < -1 {
            let right = nodes[node_idx]
                .right
                .expect("right-heavy node must have a right child");
            if nodes[inserted].key.cmp(&nodes[right].key) == Ordering::Less {
                nodes[node_idx].right = Some(Self::rotate_right(nodes, right));
            }
            return Self::rotate_left(nodes, node_idx);
        }

        node_idx
    }

    /// Rebalance `node_idx` after a node was removed from its subtree.
    ///
    /// Returns the root of the (possibly rotated) subtree.
    pub(super) fn rebalance_after_delete(
        nodes: &mut NodeArena<K, V>,
        node_idx: NodeIndex,
    ) -> NodeIndex {
        nodes.update_height(node_idx);
        let balance = nodes.balance_factor(node_idx);

        if balance > 1 {
            let left = nodes[node_idx]
                .left
                .expect("left-heavy node must have a left child");
            if nodes.balance_factor(left) < 0 {
                nodes[node_idx].left = Some(Self::rotate_left(nodes, left));
            }
            return Self::rotate_right(nodes, node_idx);
        }

        if balance < -1 {
            let right = nodes[node_idx]
                .right
                .expect("right-heavy node must have a right child");
            if nodes.balance_factor(right) > 0 {
                nodes[node_idx].right = Some(Self::rotate_right(nodes, right));
            }
            return Self::rotate_left(nodes, node_idx);
        }

        node_idx
    }
}
