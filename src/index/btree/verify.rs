//! Structural checks for a [`BTree`].
//!
//! [`BTree::verify`] walks every reachable node and reports the first
//! broken invariant it finds. The tree never produces one on its own; the
//! checker exists so tests (and curious callers) can prove it.

use thiserror::Error;

use crate::common::{Key, NodeId};
use crate::index::btree::BTree;

/// A broken B-tree invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A node holds as many keys as the degree (or more) after an insert.
    #[error("{node} holds {keys} keys, at most {max} allowed")]
    Overfull { node: NodeId, keys: usize, max: usize },

    /// A reachable node has no keys.
    #[error("{node} holds no keys")]
    Empty { node: NodeId },

    /// An internal node whose child count is not `keys + 1`.
    #[error("{node} has {children} children for {keys} keys")]
    ChildCount {
        node: NodeId,
        keys: usize,
        children: usize,
    },

    /// Keys inside one node are not ascending.
    #[error("{node} keys are not in ascending order")]
    Unsorted { node: NodeId },

    /// A key lies outside the range its ancestors' separators allow.
    #[error("{node} holds key {key} outside its separator range")]
    OutOfRange { node: NodeId, key: Key },

    /// A back-reference disagrees with the owning node.
    #[error("{node} points at parent {found:?} but is owned by {expected:?}")]
    ParentMismatch {
        node: NodeId,
        expected: Option<NodeId>,
        found: Option<NodeId>,
    },

    /// Leaves at different depths.
    #[error("leaf {node} sits at depth {depth}, expected {expected}")]
    UnevenDepth {
        node: NodeId,
        depth: usize,
        expected: usize,
    },

    /// The running length disagrees with the number of stored keys.
    #[error("tree reports {reported} keys but stores {stored}")]
    LengthMismatch { reported: usize, stored: usize },
}

/// One pending node in the walk, with the bounds inherited from its
/// ancestors' separators.
struct Pending {
    id: NodeId,
    parent: Option<NodeId>,
    lower: Option<Key>,
    upper: Option<Key>,
    depth: usize,
}

impl BTree {
    /// Check every structural invariant of the tree.
    ///
    /// # Errors
    /// Returns the first [`Violation`] found. An empty tree always passes.
    pub fn verify(&self) -> Result<(), Violation> {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(()),
                reported => Err(Violation::LengthMismatch { reported, stored: 0 }),
            };
        };

        let max = self.degree.max_keys();
        let mut stored = 0;
        let mut leaf_depth = None;
        let mut stack = vec![Pending {
            id: root,
            parent: None,
            lower: None,
            upper: None,
            depth: 1,
        }];

        while let Some(pending) = stack.pop() {
            let node = self.node(pending.id);
            let id = pending.id;

            if node.parent != pending.parent {
                return Err(Violation::ParentMismatch {
                    node: id,
                    expected: pending.parent,
                    found: node.parent,
                });
            }
            if node.keys.is_empty() {
                return Err(Violation::Empty { node: id });
            }
            if node.keys.len() > max {
                return Err(Violation::Overfull {
                    node: id,
                    keys: node.keys.len(),
                    max,
                });
            }
            if node.keys.windows(2).any(|pair| pair[0] > pair[1]) {
                return Err(Violation::Unsorted { node: id });
            }
            let out_of_range = node.keys.iter().find(|&&key| {
                pending.lower.is_some_and(|lower| key < lower)
                    || pending.upper.is_some_and(|upper| key > upper)
            });
            if let Some(&key) = out_of_range {
                return Err(Violation::OutOfRange { node: id, key });
            }
            stored += node.keys.len();

            if node.is_leaf() {
                match leaf_depth {
                    None => leaf_depth = Some(pending.depth),
                    Some(expected) if expected != pending.depth => {
                        return Err(Violation::UnevenDepth {
                            node: id,
                            depth: pending.depth,
                            expected,
                        });
                    }
                    Some(_) => {}
                }
                continue;
            }

            if node.children.len() != node.keys.len() + 1 {
                return Err(Violation::ChildCount {
                    node: id,
                    keys: node.keys.len(),
                    children: node.children.len(),
                });
            }
            for (i, &child) in node.children.iter().enumerate() {
                let lower = match i {
                    0 => pending.lower,
                    _ => Some(node.keys[i - 1]),
                };
                let upper = node.keys.get(i).copied().or(pending.upper);
                stack.push(Pending {
                    id: child,
                    parent: Some(id),
                    lower,
                    upper,
                    depth: pending.depth + 1,
                });
            }
        }

        if stored != self.len {
            return Err(Violation::LengthMismatch {
                reported: self.len,
                stored,
            });
        }
        Ok(())
    }
}
