//! Configuration constants for arbor.

/// Smallest degree a [`BTree`](crate::BTree) accepts.
///
/// A degree-3 tree is a 2-3 tree: nodes hold one or two keys and split
/// the moment they reach three.
pub const MIN_DEGREE: usize = 3;

/// Largest degree a [`BTree`](crate::BTree) accepts.
pub const MAX_DEGREE: usize = 7;

/// Degree used by `BTree::default()`.
pub const DEFAULT_DEGREE: usize = 4;
