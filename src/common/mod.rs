//! Common types and utilities shared across arbor.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The B-tree key type and validated degree
//! - Arena handles (NodeId)

pub mod config;
mod degree;
pub mod error;
mod node_id;

pub use degree::Degree;
pub use error::{Error, Result};
pub use node_id::NodeId;

/// Key stored by the B-tree.
///
/// Keys are totally ordered scalars. Duplicates are kept as separate entries.
pub type Key = i64;
