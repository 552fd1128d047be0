//! Node - one slot in the B-tree arena.
//!
//! A [`Node`] holds an ordered run of keys plus the handles of its children:
//! - Keys are ascending; equal keys stay in insertion order
//! - Children are either empty (leaf) or exactly `keys.len() + 1`
//! - `parent` is a navigation-only back-reference; the parent's `children`
//!   vector is the real ownership link

use crate::common::{Key, NodeId};

/// A node in the B-tree arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Node {
    /// Keys in ascending order.
    pub(crate) keys: Vec<Key>,

    /// Child handles, empty for a leaf.
    pub(crate) children: Vec<NodeId>,

    /// Owning node, or None for the root (and for retired slots).
    pub(crate) parent: Option<NodeId>,
}

/// A node's contents cut around its middle key.
///
/// Produced by [`Node::partition`] and consumed by the split procedure,
/// which turns each half into a brand new node.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Partition {
    pub(crate) middle: Key,
    pub(crate) left_keys: Vec<Key>,
    pub(crate) left_children: Vec<NodeId>,
    pub(crate) right_keys: Vec<Key>,
    pub(crate) right_children: Vec<NodeId>,
}

impl Node {
    /// Create a node from its parts.
    pub(crate) fn new(keys: Vec<Key>, children: Vec<NodeId>, parent: Option<NodeId>) -> Self {
        Self {
            keys,
            children,
            parent,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the child whose range holds `value`.
    ///
    /// The first key strictly greater than `value` names the child to its
    /// left; if no key is greater the last child is chosen. Equal values
    /// therefore always route right of their separator.
    #[inline]
    pub(crate) fn child_slot(&self, value: Key) -> usize {
        self.keys.partition_point(|&k| k <= value)
    }

    /// Handle of the child whose range holds `value`.
    ///
    /// Returns None for a leaf.
    #[inline]
    pub(crate) fn child_for(&self, value: Key) -> Option<NodeId> {
        self.children.get(self.child_slot(value)).copied()
    }

    /// Check whether this node itself stores `value`.
    #[inline]
    pub(crate) fn contains(&self, value: Key) -> bool {
        self.keys.contains(&value)
    }

    /// Insert `value` before the first strictly greater key.
    ///
    /// Returns the position the key landed at.
    pub(crate) fn insert_key(&mut self, value: Key) -> usize {
        let pos = self.child_slot(value);
        self.keys.insert(pos, value);
        pos
    }

    /// Cut this node around `keys[(n - 1) / 2]`, consuming it.
    ///
    /// The left half keeps one more child than it has keys; the right half
    /// takes the rest. A leaf yields two empty child lists.
    ///
    /// Must only be called on a node with at least one key.
    pub(crate) fn partition(self) -> Partition {
        let Node {
            mut keys,
            mut children,
            ..
        } = self;

        let middle_index = (keys.len() - 1) / 2;
        let right_keys = keys.split_off(middle_index + 1);
        let middle = keys[middle_index];
        keys.truncate(middle_index);

        let right_children = if children.is_empty() {
            Vec::new()
        } else {
            children.split_off(middle_index + 1)
        };

        Partition {
            middle,
            left_keys: keys,
            left_children: children,
            right_keys,
            right_children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_insert_key_ordered() {
        let mut node = Node::default();
        node.insert_key(5);
        node.insert_key(1);
        node.insert_key(3);
        node.insert_key(9);
        assert_eq!(node.keys, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_insert_key_duplicates_go_last() {
        let mut node = Node::new(vec![1, 2, 2, 4], Vec::new(), None);
        let pos = node.insert_key(2);
        assert_eq!(pos, 3);
        assert_eq!(node.keys, vec![1, 2, 2, 2, 4]);
    }

    #[test]
    fn test_child_slot() {
        let node = Node::new(vec![10, 20], ids(&[0, 1, 2]), None);
        assert_eq!(node.child_slot(5), 0);
        assert_eq!(node.child_slot(10), 1);
        assert_eq!(node.child_slot(15), 1);
        assert_eq!(node.child_slot(20), 2);
        assert_eq!(node.child_slot(99), 2);
        assert_eq!(node.child_for(15), Some(NodeId::new(1)));
    }

    #[test]
    fn test_child_for_leaf_is_none() {
        let node = Node::new(vec![1, 2], Vec::new(), None);
        assert!(node.is_leaf());
        assert_eq!(node.child_for(1), None);
    }

    #[test]
    fn test_partition_leaf_odd() {
        let node = Node::new(vec![1, 2, 3], Vec::new(), None);
        let p = node.partition();
        assert_eq!(p.middle, 2);
        assert_eq!(p.left_keys, vec![1]);
        assert_eq!(p.right_keys, vec![3]);
        assert!(p.left_children.is_empty());
        assert!(p.right_children.is_empty());
    }

    #[test]
    fn test_partition_leaf_even_biases_left() {
        // (4 - 1) / 2 = 1, so the second key is promoted
        let node = Node::new(vec![1, 2, 3, 4], Vec::new(), None);
        let p = node.partition();
        assert_eq!(p.middle, 2);
        assert_eq!(p.left_keys, vec![1]);
        assert_eq!(p.right_keys, vec![3, 4]);
    }

    #[test]
    fn test_partition_internal_children() {
        let node = Node::new(vec![2, 4, 6, 8], ids(&[10, 11, 12, 13, 14]), None);
        let p = node.partition();
        assert_eq!(p.middle, 4);
        assert_eq!(p.left_keys, vec![2]);
        assert_eq!(p.left_children, ids(&[10, 11]));
        assert_eq!(p.right_keys, vec![6, 8]);
        assert_eq!(p.right_children, ids(&[12, 13, 14]));
    }
}
