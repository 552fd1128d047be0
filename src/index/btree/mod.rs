//! B-tree index.
//!
//! An in-memory B-tree of degree 3 to 7 built on an arena of nodes.
//!
//! # Components
//! - [`BTree`] - Insertion with cascading splits, membership lookup
//! - [`Shape`] - Owned snapshot of the node layout
//! - [`TreeStats`] - Insert and split counters
//! - [`Violation`] - Broken invariants reported by [`BTree::verify`]
//!
//! Deletion is not supported.

mod node;
mod shape;
mod stats;
mod tree;
mod verify;

pub use shape::Shape;
pub use stats::TreeStats;
pub use tree::BTree;
pub use verify::Violation;
