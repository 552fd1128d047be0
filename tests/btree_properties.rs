//! Property tests for the B-tree.
//!
//! Random insertion sequences over every supported degree, checked against
//! the structural invariants and a sorted `Vec` model.

use arbor::BTree;
use proptest::prelude::*;

/// Narrow key space so duplicates show up often.
fn values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..300)
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_insert(degree in 3usize..=7, values in values()) {
        let mut tree = BTree::new(degree).unwrap();
        for &v in &values {
            tree.insert(v);
            prop_assert_eq!(tree.verify(), Ok(()));
        }
    }

    #[test]
    fn prop_every_inserted_value_exists(degree in 3usize..=7, values in values()) {
        let tree = BTree::with_values(degree, values.iter().copied()).unwrap();
        for &v in &values {
            prop_assert!(tree.exists(v));
        }
    }

    #[test]
    fn prop_missing_values_do_not_exist(
        degree in 3usize..=7,
        values in values(),
        probe in -100i64..100,
    ) {
        let tree = BTree::with_values(degree, values.iter().copied()).unwrap();
        prop_assert_eq!(tree.exists(probe), values.contains(&probe));
    }

    #[test]
    fn prop_keys_match_sorted_model(degree in 3usize..=7, values in values()) {
        let tree = BTree::with_values(degree, values.iter().copied()).unwrap();
        let mut model = values.clone();
        model.sort();
        prop_assert_eq!(tree.len(), model.len());
        prop_assert_eq!(tree.keys(), model);
    }

    #[test]
    fn prop_shape_is_deterministic(degree in 3usize..=7, values in values()) {
        let a = BTree::with_values(degree, values.iter().copied()).unwrap();
        let b = BTree::with_values(degree, values.iter().copied()).unwrap();
        prop_assert_eq!(a.shape(), b.shape());
    }

    #[test]
    fn prop_node_bounds_in_shape(degree in 3usize..=7, values in values()) {
        let tree = BTree::with_values(degree, values.iter().copied()).unwrap();
        let mut stack: Vec<_> = tree.shape().into_iter().collect();
        while let Some(shape) = stack.pop() {
            prop_assert!(shape.keys.len() < degree);
            prop_assert!(shape.is_leaf() || shape.children.len() == shape.keys.len() + 1);
            stack.extend(shape.children);
        }
    }
}
