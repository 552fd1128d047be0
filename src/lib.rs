//! arbor - a from-scratch B-tree and doubly linked list.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             arbor                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────┐   ┌───────────────────────────┐ │
//! │  │   Index Layer (index/)    │   │      List (list/)         │ │
//! │  │  BTree: insert + split,   │   │  LinkedList<T>: prepend,  │ │
//! │  │  exists, shape, verify    │   │  append, insert, remove,  │ │
//! │  │  arena: Vec<Node>         │   │  shift, pop, swap, get    │ │
//! │  └───────────────────────────┘   └───────────────────────────┘ │
//! │                 ↓                               ↓               │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Common (common/)                        │   │
//! │  │        Key, Degree, NodeId, Error, config constants      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both structures keep their nodes in an arena and link them with
//! [`NodeId`] handles, so back-references (`parent`, `prev`) never own
//! anything and no `unsafe` or reference counting is needed.
//!
//! # Modules
//! - [`common`] - Shared primitives (Key, Degree, NodeId, Error, config)
//! - [`index`] - The B-tree
//! - [`list`] - The doubly linked list
//!
//! # Quick Start
//! ```
//! use arbor::{BTree, LinkedList};
//!
//! let mut tree = BTree::new(4)?;
//! tree.extend(1..=10);
//! assert!(tree.exists(7));
//! assert_eq!(tree.shape().unwrap().to_string(), "[4]([2]([1] [3]) [6, 8]([5] [7] [9, 10]))");
//!
//! let mut list = LinkedList::from_values(["b", "c"]);
//! list.prepend("a");
//! assert_eq!(list.get(2), Some(&"c"));
//! # Ok::<(), arbor::Error>(())
//! ```

pub mod common;
pub mod index;
pub mod list;

// Re-export commonly used items at crate root for convenience
pub use common::{Degree, Error, Key, NodeId, Result};

pub use index::btree::{BTree, Shape, TreeStats, Violation};
pub use list::LinkedList;
