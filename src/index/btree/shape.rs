//! Value snapshot of a B-tree's structure.

use std::fmt;

use crate::common::Key;

/// An owned, recursive copy of a tree's node layout.
///
/// Two trees with equal shapes have the same keys in the same nodes at the
/// same positions. Handles are not part of a shape, so arena slot reuse
/// never affects equality.
///
/// # Example
/// ```
/// use arbor::{BTree, Shape};
///
/// let tree = BTree::with_values(3, 1..=3).unwrap();
/// let expected = Shape::node(vec![2], vec![Shape::leaf(vec![1]), Shape::leaf(vec![3])]);
/// assert_eq!(tree.shape(), Some(expected));
/// assert_eq!(tree.shape().unwrap().to_string(), "[2]([1] [3])");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    pub keys: Vec<Key>,
    pub children: Vec<Shape>,
}

impl Shape {
    /// A childless node.
    pub fn leaf(keys: Vec<Key>) -> Self {
        Self {
            keys,
            children: Vec::new(),
        }
    }

    /// An internal node.
    pub fn node(keys: Vec<Key>, children: Vec<Shape>) -> Self {
        Self { keys, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Levels from this node down to its leftmost leaf, inclusive.
    pub fn height(&self) -> usize {
        1 + self.children.first().map_or(0, Shape::height)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "]")?;

        if !self.children.is_empty() {
            write!(f, "(")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
