/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for `AvlTree::insert` and the insertion rotations.

use avl_tree::AvlTree;
use rstest::rstest;

use crate::helpers::{build_tree, key_of, max_avl_height, payload, root_shape};

#[rstest]
#[case::left_left_single_right_rotation(&[30, 20, 10])]
#[case::right_right_single_left_rotation(&[10, 20, 30])]
#[case::left_right_double_rotation(&[30, 10, 20])]
#[case::right_left_double_rotation(&[10, 30, 20])]
fn test_three_keys_rotate_to_balanced_root(#[case] keys: &[i32]) {
    let tree = build_tree(keys);

    assert_eq!(root_shape(&tree), (Some(20), Some(10), Some(30)));
    assert_eq!(tree.height(), 2);

    let root = tree.root().unwrap();
    assert_eq!(tree.node(root.left_index().unwrap()).height(), 1);
    assert_eq!(tree.node(root.right_index().unwrap()).height(), 1);
}

#[test]
fn test_first_insert_creates_leaf_root() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.insert(42, "answer"), None);

    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 42);
    assert_eq!(*root.value(), "answer");
    assert_eq!(root.height(), 1);
    assert!(root.is_leaf());
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_rotation_deep_in_the_tree() {
    // 50, 30, 70 form a balanced top; 20 then 10 unbalance node 30 only.
    let tree = build_tree(&[50, 30, 70, 20, 10]);

    assert_eq!(root_shape(&tree), (Some(50), Some(20), Some(70)));
    let left = tree.node(tree.root().unwrap().left_index().unwrap());
    assert_eq!(key_of(&tree, left.left_index()), Some(10));
    assert_eq!(key_of(&tree, left.right_index()), Some(30));
}

#[test]
fn test_rotation_changes_root_of_larger_tree() {
    // Right-left case at the root once 35 lands under 40.
    let tree = build_tree(&[20, 10, 40, 30, 50, 35]);

    assert_eq!(root_shape(&tree), (Some(30), Some(20), Some(40)));
    assert_eq!(tree.height(), 3);
}

#[test]
fn test_duplicate_key_overwrites_payload() {
    let mut tree = build_tree(&[10, 20, 30]);
    let shape_before = tree.dump().to_string();

    assert_eq!(tree.insert(20, "replaced".to_owned()), Some(payload(20)));

    assert_eq!(tree.find(&20).map(String::as_str), Some("replaced"));
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.dump().to_string(), shape_before);
    tree.check_tree_invariants();
}

#[test]
fn test_sequential_inserts_stay_logarithmic() {
    let keys: Vec<i32> = (1..=1000).collect();
    let tree = build_tree(&keys);

    assert_eq!(tree.len(), 1000);
    assert!(
        tree.height() <= max_avl_height(1000),
        "height {} exceeds the AVL bound",
        tree.height()
    );
}

#[test]
fn test_descending_inserts_stay_logarithmic() {
    let keys: Vec<i32> = (1..=1000).rev().collect();
    let tree = build_tree(&keys);

    assert!(tree.height() <= max_avl_height(1000));
    let keys_in_order: Vec<i32> = tree.keys().copied().collect();
    assert_eq!(keys_in_order, (1..=1000).collect::<Vec<_>>());
}

#[test]
fn test_extend_and_from_iter() {
    let mut tree: AvlTree<i32, String> = [(30, payload(30)), (10, payload(10))]
        .into_iter()
        .collect();
    tree.extend([(20, payload(20))]);

    assert_eq!(root_shape(&tree), (Some(20), Some(10), Some(30)));
    tree.check_tree_invariants();
}
