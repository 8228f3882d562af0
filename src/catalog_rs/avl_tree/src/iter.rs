/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Iterators for traversing the AVL tree.
//!
//! Both iterators walk a complete subtree with an explicit stack, starting
//! either at the root or at any node handle returned by
//! [`AvlTree::find_node`].

use std::iter::FusedIterator;

use crate::arena::NodeIndex;
use crate::{AvlNode, AvlTree};

/// An iterator yielding the nodes of a subtree in ascending key order.
#[derive(Debug)]
pub struct InOrderIterator<'a, K, V> {
    /// Reference to the tree (used to resolve node indices).
    tree: &'a AvlTree<K, V>,
    /// Nodes whose left subtree has been pushed but that were not yielded yet.
    stack: Vec<NodeIndex>,
}

impl<'a, K, V> InOrderIterator<'a, K, V> {
    /// Create a new iterator over the whole tree.
    pub fn new(tree: &'a AvlTree<K, V>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity(tree.height() as usize),
        };
        iter.push_left_spine(tree.root_index());
        iter
    }

    /// Create a new iterator over the subtree rooted at `node_idx`.
    pub fn from_node(tree: &'a AvlTree<K, V>, node_idx: NodeIndex) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::with_capacity(tree.node(node_idx).height() as usize),
        };
        iter.push_left_spine(Some(node_idx));
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<NodeIndex>) {
        while let Some(idx) = next {
            self.stack.push(idx);
            next = self.tree.node(idx).left_index();
        }
    }
}

impl<'a, K, V> Iterator for InOrderIterator<'a, K, V> {
    type Item = &'a AvlNode<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.stack.pop()?;
        let node = self.tree.node(node_idx);
        self.push_left_spine(node.right_index());
        Some(node)
    }
}

impl<K, V> FusedIterator for InOrderIterator<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a AvlTree<K, V> {
    type Item = &'a AvlNode<K, V>;
    type IntoIter = InOrderIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        InOrderIterator::new(self)
    }
}

/// An iterator that performs a pre-order depth-first traversal of a subtree.
///
/// Parents are visited before their children, left children before right
/// children. Useful for dumping the shape of the tree.
#[derive(Debug)]
pub struct PreOrderDfsIterator<'a, K, V> {
    tree: &'a AvlTree<K, V>,
    /// Stack of node indices to visit. Nodes are pushed right-first so left is
    /// processed first (LIFO order).
    stack: Vec<NodeIndex>,
}

impl<'a, K, V> PreOrderDfsIterator<'a, K, V> {
    /// Create a new iterator starting from the root of the given tree.
    pub fn new(tree: &'a AvlTree<K, V>) -> Self {
        Self {
            tree,
            stack: tree.root_index().into_iter().collect(),
        }
    }

    /// Create a new iterator starting from the given node index in the tree.
    pub fn from_node(tree: &'a AvlTree<K, V>, node_idx: NodeIndex) -> Self {
        let mut stack = Vec::with_capacity(4);
        stack.push(node_idx);
        Self { tree, stack }
    }
}

impl<'a, K, V> Iterator for PreOrderDfsIterator<'a, K, V> {
    type Item = &'a AvlNode<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node_idx = self.stack.pop()?;
        let node = self.tree.node(node_idx);

        self.stack.extend(node.right_index());
        self.stack.extend(node.left_index());

        Some(node)
    }
}

impl<K, V> FusedIterator for PreOrderDfsIterator<'_, K, V> {}
