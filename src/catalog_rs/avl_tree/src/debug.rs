/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Debug and introspection utilities for the AVL tree.
//!
//! [`TreeDump`] renders the shape of the tree as text. With the `serde`
//! feature, [`TreeSnapshot`] exposes the same structure as a nested,
//! serializable value (keys, heights, payloads and both children).

use std::fmt;

use crate::AvlTree;
use crate::arena::NodeIndex;

/// Text rendering of a tree, one key per line.
///
/// Left children are drawn with `├──`, right children with `└──`:
///
/// ```text
/// 20
/// ├── 10
/// │   ├── 5
/// └── 30
/// ```
#[derive(Debug)]
pub struct TreeDump<'a, K, V> {
    tree: &'a AvlTree<K, V>,
}

impl<K, V> AvlTree<K, V> {
    /// Render the shape of the tree. See [`TreeDump`].
    pub const fn dump(&self) -> TreeDump<'_, K, V> {
        TreeDump { tree: self }
    }
}

/// Which side of its parent a node hangs from.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl<K: fmt::Display, V> TreeDump<'_, K, V> {
    fn fmt_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node_idx: NodeIndex,
        prefix: &str,
        side: Option<Side>,
    ) -> fmt::Result {
        let node = self.tree.node(node_idx);
        let child_prefix = match side {
            None => {
                writeln!(f, "{}", node.key())?;
                String::new()
            }
            Some(Side::Left) => {
                writeln!(f, "{prefix}├── {}", node.key())?;
                format!("{prefix}│   ")
            }
            Some(Side::Right) => {
                writeln!(f, "{prefix}└── {}", node.key())?;
                format!("{prefix}    ")
            }
        };

        if let Some(left) = node.left_index() {
            self.fmt_node(f, left, &child_prefix, Some(Side::Left))?;
        }
        if let Some(right) = node.right_index() {
            self.fmt_node(f, right, &child_prefix, Some(Side::Right))?;
        }
        Ok(())
    }
}

impl<K: fmt::Display, V> fmt::Display for TreeDump<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree.root_index() {
            Some(root) => self.fmt_node(f, root, "", None),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
pub use snapshot::{NodeSnapshot, TreeSnapshot};

#[cfg(feature = "serde")]
mod snapshot {
    use serde::Serialize;

    use crate::AvlTree;
    use crate::arena::NodeIndex;

    /// Serializable view of a whole tree.
    ///
    /// Serializes as `{"root": <node or null>}`.
    #[derive(Debug, Serialize)]
    pub struct TreeSnapshot<'a, K, V> {
        pub root: Option<NodeSnapshot<'a, K, V>>,
    }

    /// Serializable view of one node and its subtree.
    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct NodeSnapshot<'a, K, V> {
        pub key: &'a K,
        pub height: u32,
        pub data: &'a V,
        pub left_child: Option<Box<NodeSnapshot<'a, K, V>>>,
        pub right_child: Option<Box<NodeSnapshot<'a, K, V>>>,
    }

    impl<K, V> AvlTree<K, V> {
        /// Capture the structure of the tree for serialization.
        pub fn snapshot(&self) -> TreeSnapshot<'_, K, V> {
            TreeSnapshot {
                root: self.root_index().map(|root| self.snapshot_node(root)),
            }
        }

        fn snapshot_node(&self, node_idx: NodeIndex) -> NodeSnapshot<'_, K, V> {
            let node = self.node(node_idx);
            NodeSnapshot {
                key: node.key(),
                height: node.height(),
                data: node.value(),
                left_child: node
                    .left_index()
                    .map(|left| Box::new(self.snapshot_node(left))),
                right_child: node
                    .right_index()
                    .map(|right| Box::new(self.snapshot_node(right))),
            }
        }
    }
}
