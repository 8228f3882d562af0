/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Write path: insertion.
//!
//! Inserting a key descends the tree like a plain binary search tree, places
//! a new leaf, and rebalances every ancestor on the way back up.

use std::cmp::Ordering;

use super::AvlTree;
use crate::AvlNode;
use crate::arena::{NodeArena, NodeIndex};

/// What happened below a node during a recursive insertion.
enum Placement<V> {
    /// A new leaf was created. The subtree may need rebalancing.
    Inserted(NodeIndex),
    /// The key already existed; its payload was swapped with the new one.
    Replaced(V),
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Insert `value` under `key`.
    ///
    /// Returns `None` if a new node was created. If the key was already
    /// present its payload is overwritten in place and the previous payload
    /// is returned; the shape of the tree does not change in that case.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let placement = match self.root {
            None => {
                self.root = Some(self.nodes.insert(AvlNode::leaf(key, value)));
                return None;
            }
            Some(root) => {
                let (new_root, placement) = Self::node_insert(&mut self.nodes, root, key, value);
                self.root = Some(new_root);
                placement
            }
        };

        #[cfg(feature = "unittest")]
        self.check_tree_invariants();

        match placement {
            Placement::Inserted(_) => None,
            Placement::Replaced(previous) => Some(previous),
        }
    }

    /// Recursive insert implementation.
    ///
    /// Returns the root of the subtree after rebalancing, together with
    /// what happened to the key.
    fn node_insert(
        nodes: &mut NodeArena<K, V>,
        node_idx: NodeIndex,
        key: K,
        value: V,
    ) -> (NodeIndex, Placement<V>) {
        let (child, go_left) = match key.cmp(&nodes[node_idx].key) {
            Ordering::Less => (nodes[node_idx].left, true),
            Ordering::Greater => (nodes[node_idx].right, false),
            Ordering::Equal => {
                let previous = std::mem::replace(&mut nodes[node_idx].value, value);
                return (node_idx, Placement::Replaced(previous));
            }
        };

        let (new_child, placement) = match child {
            None => {
                let leaf = nodes.insert(AvlNode::leaf(key, value));
                (leaf, Placement::Inserted(leaf))
            }
            Some(child) => Self::node_insert(nodes, child, key, value),
        };

        if go_left {
            nodes[node_idx].left = Some(new_child);
        } else {
            nodes[node_idx].right = Some(new_child);
        }

        match placement {
            Placement::Inserted(leaf) => (
                Self::rebalance_after_insert(nodes, node_idx, leaf),
                placement,
            ),
            // Heights are unchanged below us, nothing to rebalance.
            Placement::Replaced(_) => (node_idx, placement),
        }
    }
}
