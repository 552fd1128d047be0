//! Arena handle type.

use std::fmt;

/// Identifies a node slot in an arena.
///
/// Both the B-tree and the linked list keep their nodes in a `Vec` and link
/// them with these handles instead of pointers, so a back-reference
/// (`parent`, `prev`) is just a copy of an index and never owns anything.
///
/// # Example
/// ```
/// use arbor::NodeId;
///
/// let id = NodeId::new(5);
/// // Can use directly as index: nodes[id.0]
/// assert_eq!(id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
