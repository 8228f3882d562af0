/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the AVL tree using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use std::collections::BTreeMap;

    use avl_tree::AvlTree;
    use proptest::prelude::*;

    use crate::helpers::max_avl_height;

    #[derive(Debug, Clone)]
    enum Op {
        Insert(u16, u32),
        Delete(u16),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        // A small key space makes duplicate inserts and hits on delete common.
        prop_oneof![
            3 => (0u16..256, any::<u32>()).prop_map(|(key, value)| Op::Insert(key, value)),
            2 => (0u16..256).prop_map(Op::Delete),
        ]
    }

    proptest! {
        #[test]
        fn prop_matches_btree_model(ops in proptest::collection::vec(op_strategy(), 1..400)) {
            let mut tree = AvlTree::new();
            let mut model = BTreeMap::new();

            for op in ops {
                match op {
                    Op::Insert(key, value) => {
                        prop_assert_eq!(tree.insert(key, value), model.insert(key, value));
                    }
                    Op::Delete(key) => {
                        prop_assert_eq!(tree.delete(&key), model.remove(&key));
                    }
                }
                tree.check_tree_invariants();
                prop_assert_eq!(tree.len(), model.len());
                prop_assert!(tree.height() <= max_avl_height(tree.len()));
            }

            let tree_entries: Vec<(u16, u32)> =
                tree.iter().map(|node| (*node.key(), *node.value())).collect();
            let model_entries: Vec<(u16, u32)> = model.into_iter().collect();
            prop_assert_eq!(tree_entries, model_entries);
        }

        #[test]
        fn prop_find_agrees_with_membership(
            keys in proptest::collection::btree_set(any::<i64>(), 0..200),
            probes in proptest::collection::vec(any::<i64>(), 0..50),
        ) {
            let tree: AvlTree<i64, i64> = keys.iter().map(|&key| (key, key.wrapping_mul(3))).collect();
            tree.check_tree_invariants();

            for probe in probes.iter().chain(keys.iter()) {
                let expected = keys.contains(probe).then(|| probe.wrapping_mul(3));
                prop_assert_eq!(tree.find(probe).copied(), expected);
            }
        }

        #[test]
        fn prop_subtree_iteration_stays_within_subtree(
            keys in proptest::collection::btree_set(0u32..10_000, 1..150),
        ) {
            let tree: AvlTree<u32, ()> = keys.iter().map(|&key| (key, ())).collect();

            for node in tree.iter() {
                let idx = tree.find_node(node.key()).unwrap();
                let visited: Vec<u32> = avl_tree::InOrderIterator::from_node(&tree, idx)
                    .map(|node| *node.key())
                    .collect();
                prop_assert!(visited.windows(2).all(|pair| pair[0] < pair[1]));
                prop_assert!(visited.contains(node.key()));
                prop_assert!(visited.len() < 1 << node.height());
            }
        }
    }
}
