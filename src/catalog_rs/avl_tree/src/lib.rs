/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! AvlTree - A self-balancing ordered index mapping unique keys to payloads.
//!
//! # Overview
//!
//! The [`AvlTree`] keeps the heights of the two subtrees of every node within
//! one of each other, so insertion, deletion and lookup are `O(log n)` no
//! matter the order in which keys arrive. It provides:
//!
//! - Recursive insertion with bottom-up rebalancing across the four rotation
//!   cases (left-left, right-right, left-right, right-left)
//! - Deletion with in-order successor promotion
//! - Node lookup handles ([`NodeIndex`]) and subtree iterators, which the
//!   recommendation engine uses to aggregate a node's whole descendant set
//! - Invariant checks ([`AvlTree::check_tree_invariants`]) and debug dumps
//!
//! The tree is a plain in-memory structure: it never performs I/O and has
//! no internal synchronization. Mutation requires `&mut self`.
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key, key * 100);
//! }
//!
//! // Ascending insertions trigger a single left rotation.
//! let root = tree.root().unwrap();
//! assert_eq!(*root.key(), 20);
//! assert_eq!(tree.find(&30), Some(&3000));
//!
//! let keys: Vec<_> = tree.keys().copied().collect();
//! assert_eq!(keys, [10, 20, 30]);
//! ```

mod arena;
mod debug;
mod iter;
mod node;
mod tree;

pub use arena::NodeIndex;
#[cfg(feature = "serde")]
pub use debug::{NodeSnapshot, TreeSnapshot};
pub use debug::TreeDump;
pub use iter::{InOrderIterator, PreOrderDfsIterator};
pub use node::AvlNode;
pub use tree::AvlTree;
