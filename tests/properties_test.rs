//! Property tests: invariants hold after arbitrary insert/delete sequences

use std::collections::BTreeSet;

use avltree::AvlTree;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Delete(i16),
}

fn op() -> impl Strategy<Value = Op> {
    // Narrow value range so deletes regularly hit present values
    prop_oneof![
        3 => (-200i16..200).prop_map(Op::Insert),
        2 => (-200i16..200).prop_map(Op::Delete),
    ]
}

/// Upper bound on AVL height for `n` nodes.
fn height_bound(n: usize) -> f64 {
    1.44 * ((n + 2) as f64).log2() - 0.328
}

proptest! {
    #[test]
    fn invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 0..300)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(v) => prop_assert_eq!(tree.insert(v), model.insert(v)),
                Op::Delete(v) => prop_assert_eq!(tree.delete(&v), model.remove(&v)),
            }
            prop_assert_eq!(tree.check(), Ok(()));
            prop_assert_eq!(tree.len(), model.len());
            prop_assert!((tree.height() as f64) <= height_bound(tree.len()));
        }

        let walked: Vec<i16> = tree.iter().copied().collect();
        let expected: Vec<i16> = model.iter().copied().collect();
        prop_assert_eq!(walked, expected);
    }

    #[test]
    fn inorder_is_sorted_for_any_insertion_order(
        values in prop::collection::vec(any::<i32>(), 0..500),
    ) {
        let tree: AvlTree<i32> = values.iter().copied().collect();

        let inorder: Vec<i32> = tree.inorder().into_iter().copied().collect();
        let mut expected = values.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(inorder, expected);
    }

    #[test]
    fn insert_then_delete_round_trips(
        values in prop::collection::btree_set(-1000i32..1000, 1..200),
    ) {
        let mut tree: AvlTree<i32> = values.iter().copied().collect();

        for v in &values {
            prop_assert!(tree.exists(v));
            prop_assert!(tree.delete(v));
            prop_assert!(!tree.exists(v));
            prop_assert!(tree.validate());
        }
        prop_assert!(tree.is_empty());
    }

    #[test]
    fn deleting_absent_value_changes_nothing(
        values in prop::collection::vec(0i32..1000, 0..200),
        absent in 1000i32..2000,
    ) {
        let mut tree: AvlTree<i32> = values.into_iter().collect();
        let before = tree.clone();

        prop_assert!(!tree.delete(&absent));
        prop_assert_eq!(tree, before);
    }

    #[test]
    fn iterative_walks_agree_with_recursive_ones(
        values in prop::collection::vec(any::<i16>(), 0..200),
    ) {
        let tree: AvlTree<i16> = values.into_iter().collect();

        let preorder: Vec<&i16> = tree.preorder();
        let dfs: Vec<&i16> = tree.depth_first().collect();
        prop_assert_eq!(dfs, preorder);
        prop_assert_eq!(tree.breadth_first().count(), tree.len());
        prop_assert_eq!(tree.breadth_first().next(), tree.root());
    }
}
