/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Read path: key lookups.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::AvlTree;
use crate::arena::{NodeArena, NodeIndex};

impl<K: Ord, V> AvlTree<K, V> {
    /// Returns a reference to the payload stored under `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|idx| &self.nodes[idx].value)
    }

    /// Returns a mutable reference to the payload stored under `key`.
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|idx| &mut self.nodes[idx].value)
    }

    /// Returns true if the tree holds an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Locate the node holding `key`.
    ///
    /// Unlike [`find`](Self::find) this hands back the node itself, so
    /// callers can walk the subtree rooted at it (see
    /// [`InOrderIterator::from_node`](crate::InOrderIterator::from_node)).
    pub fn find_node<Q>(&self, key: &Q) -> Option<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find_recursive(&self.nodes, self.root?, key)
    }

    fn find_recursive<Q>(nodes: &NodeArena<K, V>, node_idx: NodeIndex, key: &Q) -> Option<NodeIndex>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = &nodes[node_idx];
        match key.cmp(node.key.borrow()) {
            Ordering::Equal => Some(node_idx),
            Ordering::Less => Self::find_recursive(nodes, node.left?, key),
            Ordering::Greater => Self::find_recursive(nodes, node.right?, key),
        }
    }
}
