/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::borrow::Borrow;

use avl_tree::{AvlTree, InOrderIterator};

use crate::{ItemSource, RankedItem, RecommendOptions};

/// One recommended item, borrowed from the tree.
#[derive(Debug, PartialEq)]
pub struct Recommendation<'a, I> {
    /// Display name of the payload the item came from.
    pub category: &'a str,
    pub item: &'a I,
}

impl<I> Clone for Recommendation<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Recommendation<'_, I> {}

/// Collect the items of the node matching `key` and of all its descendants.
///
/// Nodes are visited in key order (left subtree, node, right subtree), and
/// each node's items keep their stored order. Returns an empty vector when
/// `key` is not in the tree.
pub fn recommend<'a, K, P, Q>(
    tree: &'a AvlTree<K, P>,
    key: &Q,
) -> Vec<Recommendation<'a, P::Item>>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    P: ItemSource,
{
    subtree_items(tree, key).collect()
}

/// Like [`recommend`], then sorted and truncated as `opts` asks.
///
/// Sorting is stable: items that compare equal keep their traversal order.
pub fn recommend_with<'a, K, P, Q>(
    tree: &'a AvlTree<K, P>,
    key: &Q,
    opts: &RecommendOptions,
) -> Vec<Recommendation<'a, P::Item>>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    P: ItemSource,
    P::Item: RankedItem,
{
    let items = subtree_items(tree, key);

    let Some(order) = opts.sort else {
        return match opts.limit {
            Some(limit) => items.take(limit).collect(),
            None => items.collect(),
        };
    };

    let mut recommendations: Vec<_> = items.collect();
    recommendations.sort_by(|a, b| order.compare(a.item, b.item));
    if let Some(limit) = opts.limit {
        recommendations.truncate(limit);
    }
    recommendations
}

fn subtree_items<'a, K, P, Q>(
    tree: &'a AvlTree<K, P>,
    key: &Q,
) -> impl Iterator<Item = Recommendation<'a, P::Item>>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
    P: ItemSource,
{
    tree.find_node(key)
        .into_iter()
        .flat_map(move |idx| InOrderIterator::from_node(tree, idx))
        .flat_map(|node| {
            let payload = node.value();
            let category = payload.name();
            payload
                .items()
                .unwrap_or_default()
                .iter()
                .map(move |item| Recommendation { category, item })
        })
}
