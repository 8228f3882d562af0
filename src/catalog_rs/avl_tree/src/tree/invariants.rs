/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Structural invariant checks for the AVL tree.
//!
//! With the `unittest` feature these checks run after every `insert` and
//! `delete` to catch structural violations early. Tests may also call
//! [`AvlTree::check_tree_invariants`] directly.

use std::collections::HashSet;

use super::AvlTree;
use crate::arena::NodeIndex;

impl<K: Ord, V> AvlTree<K, V> {
    /// Verify all structural invariants of the tree.
    ///
    /// Checked properties:
    /// 1. **Ordering**: every key in a left subtree is strictly less than
    ///    its ancestor's key, every key in a right subtree strictly greater.
    /// 2. **Height**: every stored height equals
    ///    `1 + max(height(left), height(right))`.
    /// 3. **Balance**: every balance factor is in `{-1, 0, 1}`.
    /// 4. **Arena accounting**: every node in the arena is reachable from
    ///    the root exactly once.
    ///
    /// # Panics
    ///
    /// Panics with a descriptive message if any invariant is violated.
    pub fn check_tree_invariants(&self) {
        let mut visited = HashSet::with_capacity(self.nodes.len());
        if let Some(root) = self.root {
            self.check_node_invariants(root, None, None, &mut visited);
        }
        assert_eq!(
            visited.len(),
            self.nodes.len(),
            "arena holds {} nodes but only {} are reachable from the root",
            self.nodes.len(),
            visited.len(),
        );
    }

    /// Recursively check the subtree at `node_idx`, whose keys must lie
    /// strictly between `lower` and `upper`.
    ///
    /// Returns the height computed from the children.
    fn check_node_invariants(
        &self,
        node_idx: NodeIndex,
        lower: Option<&K>,
        upper: Option<&K>,
        visited: &mut HashSet<NodeIndex>,
    ) -> u32 {
        assert!(
            visited.insert(node_idx),
            "node {node_idx:?} is reachable through more than one parent",
        );
        let node = self
            .get_node(node_idx)
            .unwrap_or_else(|| panic!("child handle {node_idx:?} points to a vacant slot"));

        // --- Invariant 1: ordering ---
        if let Some(lower) = lower {
            assert!(
                node.key > *lower,
                "node {node_idx:?} is in a right subtree but its key is not greater than its ancestor's",
            );
        }
        if let Some(upper) = upper {
            assert!(
                node.key < *upper,
                "node {node_idx:?} is in a left subtree but its key is not less than its ancestor's",
            );
        }

        let left_height = node.left.map_or(0, |left| {
            self.check_node_invariants(left, lower, Some(&node.key), visited)
        });
        let right_height = node.right.map_or(0, |right| {
            self.check_node_invariants(right, Some(&node.key), upper, visited)
        });

        // --- Invariant 2: height ---
        let expected_height = left_height.max(right_height) + 1;
        assert_eq!(
            node.height, expected_height,
            "height mismatch at node {node_idx:?}: stored {}, expected {expected_height} \
             (left={left_height}, right={right_height})",
            node.height,
        );

        // --- Invariant 3: balance ---
        let imbalance = left_height.abs_diff(right_height);
        assert!(
            imbalance <= 1,
            "balance factor out of range at node {node_idx:?} (left={left_height}, right={right_height})",
        );

        expected_height
    }
}
