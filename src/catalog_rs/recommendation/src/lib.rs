/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Subtree aggregation over an [`avl_tree::AvlTree`].
//!
//! Given a key, [`recommend`] collects the items of the matching node and of
//! every node below it, in key order. Payloads opt in by implementing
//! [`ItemSource`]; a payload without items simply contributes nothing.
//!
//! [`recommend_with`] additionally orders the result by one of the
//! [`SortOrder`] criteria and caps its length, for items implementing
//! [`RankedItem`].
//!
//! Note that the descendant set depends on the shape of the tree, which in
//! turn depends on insertion order and the rotations it triggered. The same
//! set of keys inserted in a different order can produce different results
//! for the same query key.
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTree;
//! use recommendation::{ItemSource, recommend};
//!
//! struct Shelf(&'static str, Vec<u32>);
//!
//! impl ItemSource for Shelf {
//!     type Item = u32;
//!
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!
//!     fn items(&self) -> Option<&[u32]> {
//!         Some(&self.1)
//!     }
//! }
//!
//! let mut tree = AvlTree::new();
//! tree.insert(2, Shelf("b", vec![20]));
//! tree.insert(1, Shelf("a", vec![10, 11]));
//! tree.insert(3, Shelf("c", vec![30]));
//!
//! let items: Vec<u32> = recommend(&tree, &2).iter().map(|r| *r.item).collect();
//! assert_eq!(items, [10, 11, 20, 30]);
//! assert!(recommend(&tree, &4).is_empty());
//! ```

mod engine;
mod order;
mod source;

pub use engine::{Recommendation, recommend, recommend_with};
pub use order::{ParseSortOrderError, RecommendOptions, SortOrder};
pub use source::{ItemSource, RankedItem};
