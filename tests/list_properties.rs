//! Property tests for the linked list, checked against a `VecDeque` model.

use std::collections::VecDeque;

use arbor::LinkedList;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Prepend(i32),
    Append(i32),
    Insert(usize, i32),
    Shift,
    Pop,
    Remove(usize),
    Swap(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    // Indices reach past the end so out-of-range paths get exercised
    prop_oneof![
        any::<i32>().prop_map(Op::Prepend),
        any::<i32>().prop_map(Op::Append),
        (0usize..24, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        Just(Op::Shift),
        Just(Op::Pop),
        (0usize..24).prop_map(Op::Remove),
        (0usize..24, 0usize..24).prop_map(|(a, b)| Op::Swap(a, b)),
    ]
}

fn apply(list: &mut LinkedList<i32>, model: &mut VecDeque<i32>, op: &Op) {
    match *op {
        Op::Prepend(v) => {
            list.prepend(v);
            model.push_front(v);
        }
        Op::Append(v) => {
            list.append(v);
            model.push_back(v);
        }
        Op::Insert(i, v) => {
            let inserted = list.insert(i, v);
            assert_eq!(inserted, i <= model.len());
            if inserted {
                model.insert(i, v);
            }
        }
        Op::Shift => assert_eq!(list.shift(), model.pop_front()),
        Op::Pop => assert_eq!(list.pop(), model.pop_back()),
        Op::Remove(i) => assert_eq!(list.remove(i), model.remove(i)),
        Op::Swap(a, b) => {
            let in_range = a < model.len() && b < model.len();
            assert_eq!(list.swap(a, b), in_range);
            if in_range {
                model.swap(a, b);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_matches_vecdeque(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();

        for op in &ops {
            apply(&mut list, &mut model, op);

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.front(), model.front());
            prop_assert_eq!(list.back(), model.back());
        }

        let forward: Vec<i32> = list.iter().copied().collect();
        let backward: Vec<i32> = list.iter().rev().copied().collect();
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(&forward, &expected);
        prop_assert_eq!(backward, expected.iter().rev().copied().collect::<Vec<_>>());

        for i in 0..=model.len() {
            prop_assert_eq!(list.get(i), model.get(i));
        }
    }
}
