/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for the debug renderings of the tree.

use avl_tree::AvlTree;
use pretty_assertions::assert_eq;

use crate::helpers::build_tree;

#[test]
fn test_dump_empty_tree() {
    let tree: AvlTree<i32, ()> = AvlTree::new();
    assert_eq!(tree.dump().to_string(), "");
}

#[test]
fn test_dump_draws_both_sides() {
    let tree = build_tree(&[20, 10, 30, 5, 40]);
    let expected = "\
20
├── 10
│   ├── 5
└── 30
    └── 40
";
    assert_eq!(tree.dump().to_string(), expected);
}

#[test]
fn test_dump_after_two_child_delete() {
    let mut tree = build_tree(&[50, 30, 70, 20, 40, 60, 80]);
    tree.delete(&50);

    let expected = "\
60
├── 30
│   ├── 20
│   └── 40
└── 70
    └── 80
";
    assert_eq!(tree.dump().to_string(), expected);
}

#[cfg(feature = "serde")]
mod snapshot {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::helpers::build_tree;

    #[test]
    fn test_snapshot_serializes_nested_nodes() {
        let tree = build_tree(&[20, 10]);
        let value = serde_json::to_value(tree.snapshot()).unwrap();

        assert_eq!(
            value,
            json!({
                "root": {
                    "key": 20,
                    "height": 2,
                    "data": "data20",
                    "leftChild": {
                        "key": 10,
                        "height": 1,
                        "data": "data10",
                        "leftChild": null,
                        "rightChild": null,
                    },
                    "rightChild": null,
                }
            })
        );
    }

    #[test]
    fn test_snapshot_of_empty_tree() {
        let tree = build_tree(&[]);
        let value = serde_json::to_value(tree.snapshot()).unwrap();
        assert_eq!(value, json!({ "root": null }));
    }
}
