//! BTree - insertion with bottom-up node splitting.
//!
//! The [`BTree`] provides:
//! - Unconditional ordered insertion (duplicates kept)
//! - Cascading splits that grow the tree in height at the root
//! - Membership lookup
//! - Read-only views: in-order keys, shape snapshots, statistics

use tracing::{debug, trace};

use crate::common::{Degree, Key, NodeId, Result};
use crate::index::btree::node::Node;
use crate::index::btree::{Shape, TreeStats};

/// A B-tree of `i64` keys with a fixed degree between 3 and 7.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                          BTree                              │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │    root      │  │          nodes: Vec<Node>         │   │
/// │  │Option<NodeId>│─▶│  [Node0] [Node1] [Node2] ...      │   │
/// │  └──────────────┘  └───────────────────────────────────┘   │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
/// │  │  free_list   │  │    degree    │  │    stats     │      │
/// │  │ Vec<NodeId>  │  │    Degree    │  │  TreeStats   │      │
/// │  └──────────────┘  └──────────────┘  └──────────────┘      │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Nodes own their children through `children` handles; `parent` handles
/// point back up and are rewritten whenever a split moves a node.
///
/// # Usage
/// ```
/// use arbor::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// for v in 1..=7 {
///     tree.insert(v);
/// }
///
/// assert!(tree.exists(5));
/// assert!(!tree.exists(8));
/// assert_eq!(tree.height(), 3);
/// assert_eq!(tree.shape().unwrap().to_string(), "[4]([2]([1] [3]) [6]([5] [7]))");
/// ```
#[derive(Debug, Clone)]
pub struct BTree {
    /// Arena of nodes; retired slots are reset to an empty node.
    pub(super) nodes: Vec<Node>,

    /// Retired slots available for reuse (LIFO).
    pub(super) free_list: Vec<NodeId>,

    /// Entry node, or None while the tree is empty.
    pub(super) root: Option<NodeId>,

    /// Fixed at construction.
    pub(super) degree: Degree,

    /// Number of keys stored, duplicates included.
    pub(super) len: usize,

    stats: TreeStats,
}

impl BTree {
    /// Create an empty tree.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `degree` is below 3 or above 7
    pub fn new(degree: usize) -> Result<Self> {
        Ok(Self::with_degree(Degree::new(degree)?))
    }

    /// Create an empty tree from an already validated degree.
    pub fn with_degree(degree: Degree) -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            root: None,
            degree,
            len: 0,
            stats: TreeStats::new(),
        }
    }

    /// Create a tree and insert `values` in iteration order.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `degree` is below 3 or above 7
    pub fn with_values<I>(degree: usize, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Key>,
    {
        let mut tree = Self::new(degree)?;
        tree.extend(values);
        Ok(tree)
    }

    // ========================================================================
    // Public API: queries
    // ========================================================================

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree.get()
    }

    /// Number of keys stored, duplicates counted separately.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; 0 for an empty tree.
    ///
    /// Every leaf sits at the same depth, so following the first child is
    /// enough.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while let Some(id) = current {
            height += 1;
            current = self.node(id).children.first().copied();
        }
        height
    }

    /// Check whether `value` has been inserted.
    ///
    /// Each visited node is scanned for an exact match before descending
    /// into the child whose range holds `value`. Reaching a leaf without a
    /// match means the value is absent.
    pub fn exists(&self, value: Key) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if node.contains(value) {
                return true;
            }
            current = node.child_for(value);
        }
        false
    }

    /// All keys in ascending order, duplicates included.
    pub fn keys(&self) -> Vec<Key> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root {
            self.collect_keys(root, &mut out);
        }
        out
    }

    /// Snapshot of the node layout, or None if the tree is empty.
    pub fn shape(&self) -> Option<Shape> {
        self.root.map(|root| self.shape_of(root))
    }

    /// Copy of the insert/split counters.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Zero the insert/split counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // ========================================================================
    // Public API: mutation
    // ========================================================================

    /// Insert `value`.
    ///
    /// Never fails and never rejects duplicates: an equal key is placed
    /// after the existing ones. The leaf that receives the key is split if
    /// it overflows, and splits cascade towards the root.
    pub fn insert(&mut self, value: Key) {
        trace!(value, "insert");
        self.len += 1;
        self.stats.inserts += 1;

        let Some(root) = self.root else {
            let id = self.allocate(Node::new(vec![value], Vec::new(), None));
            self.root = Some(id);
            return;
        };

        let leaf = self.find_leaf(root, value);
        self.node_mut(leaf).insert_key(value);
        self.split(leaf);
    }

    /// Drop every node. The degree and statistics are kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.root = None;
        self.len = 0;
    }

    // ========================================================================
    // Internal: arena
    // ========================================================================

    #[inline]
    pub(super) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Place `node` in a free slot, growing the arena if none is left.
    fn allocate(&mut self, node: Node) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId::new(self.nodes.len() - 1)
            }
        }
    }

    /// Take a node out of the arena and free its slot.
    fn retire(&mut self, id: NodeId) -> Node {
        self.free_list.push(id);
        std::mem::take(self.node_mut(id))
    }

    /// Allocate a node under `parent` that takes ownership of `children`.
    ///
    /// Every child's back-reference is pointed at the new node before the
    /// handle is returned.
    fn adopt(&mut self, keys: Vec<Key>, children: Vec<NodeId>, parent: NodeId) -> NodeId {
        let id = self.allocate(Node::new(keys, Vec::new(), Some(parent)));
        for &child in &children {
            self.node_mut(child).parent = Some(id);
        }
        self.node_mut(id).children = children;
        id
    }

    // ========================================================================
    // Internal: insertion and splitting
    // ========================================================================

    fn find_leaf(&self, from: NodeId, value: Key) -> NodeId {
        let mut current = from;
        while let Some(child) = self.node(current).child_for(value) {
            current = child;
        }
        current
    }

    /// Restore the key-count bound starting at `id` and walking up.
    ///
    /// Stops at the first node that fits, or after a root split (the new
    /// root holds a single key).
    fn split(&mut self, id: NodeId) {
        let mut current = id;
        while self.degree.is_overfull(self.node(current).keys.len()) {
            match self.node(current).parent {
                None => {
                    self.split_root(current);
                    return;
                }
                Some(parent) => {
                    self.split_child(current, parent);
                    current = parent;
                }
            }
        }
    }

    /// Replace the root with a one-key node over two new halves.
    fn split_root(&mut self, id: NodeId) {
        let partition = self.retire(id).partition();

        let root = self.allocate(Node::new(vec![partition.middle], Vec::new(), None));
        let left = self.adopt(partition.left_keys, partition.left_children, root);
        let right = self.adopt(partition.right_keys, partition.right_children, root);
        self.node_mut(root).children = vec![left, right];
        self.root = Some(root);

        self.stats.root_splits += 1;
        debug!(
            root = %root,
            middle = partition.middle,
            height = self.height(),
            "root split"
        );
    }

    /// Replace `id` in `parent` with two new halves and promote the middle
    /// key into `parent` between them.
    fn split_child(&mut self, id: NodeId, parent: NodeId) {
        let Some(slot) = self.node(parent).children.iter().position(|&c| c == id) else {
            unreachable!("{id} is not among the children of its parent {parent}");
        };

        let partition = self.retire(id).partition();
        let left = self.adopt(partition.left_keys, partition.left_children, parent);
        let right = self.adopt(partition.right_keys, partition.right_children, parent);

        // keys[slot - 1] <= middle <= keys[slot], so `slot` keeps the
        // separators aligned with the two new children.
        let parent_node = self.node_mut(parent);
        parent_node.keys.insert(slot, partition.middle);
        parent_node.children[slot] = left;
        parent_node.children.insert(slot + 1, right);

        self.stats.node_splits += 1;
        trace!(
            node = %id,
            parent = %parent,
            middle = partition.middle,
            "node split"
        );
    }

    // ========================================================================
    // Internal: traversal
    // ========================================================================

    fn collect_keys(&self, id: NodeId, out: &mut Vec<Key>) {
        let node = self.node(id);
        if node.is_leaf() {
            out.extend_from_slice(&node.keys);
            return;
        }
        for (i, &child) in node.children.iter().enumerate() {
            self.collect_keys(child, out);
            if let Some(&key) = node.keys.get(i) {
                out.push(key);
            }
        }
    }

    fn shape_of(&self, id: NodeId) -> Shape {
        let node = self.node(id);
        Shape::node(
            node.keys.clone(),
            node.children.iter().map(|&child| self.shape_of(child)).collect(),
        )
    }
}

impl Default for BTree {
    fn default() -> Self {
        Self::with_degree(Degree::DEFAULT)
    }
}

impl Extend<Key> for BTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
