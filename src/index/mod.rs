//! Index structures.
//!
//! - [`btree`] - Order-preserving B-tree with node splitting
//!
//! The doubly linked list lives in [`crate::list`] and shares nothing with
//! this module beyond [`crate::common`].

pub mod btree;
