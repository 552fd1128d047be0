//! B-tree statistics tracking.

use std::fmt;

/// Counters kept by a [`BTree`](crate::BTree).
///
/// The tree is single-threaded and only mutated through `&mut self`, so
/// these are plain integers rather than atomics. [`BTree::stats`] hands out
/// a copy, which can be printed or compared freely.
///
/// [`BTree::stats`]: crate::BTree::stats
///
/// # Example
/// ```
/// use arbor::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// tree.extend([1, 2, 3]);
///
/// let stats = tree.stats();
/// assert_eq!(stats.inserts, 3);
/// assert_eq!(stats.root_splits, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of keys inserted.
    pub inserts: u64,

    /// Number of non-root nodes split into two siblings.
    pub node_splits: u64,

    /// Number of root splits (each one grows the tree by a level).
    pub root_splits: u64,
}

impl TreeStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total splits of any kind.
    pub fn splits(&self) -> u64 {
        self.node_splits + self.root_splits
    }

    /// Average splits per insert (0.0 when nothing was inserted).
    pub fn splits_per_insert(&self) -> f64 {
        if self.inserts == 0 {
            0.0
        } else {
            self.splits() as f64 / self.inserts as f64
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, node_splits: {}, root_splits: {}, splits_per_insert: {:.2} }}",
            self.inserts,
            self.node_splits,
            self.root_splits,
            self.splits_per_insert()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = TreeStats::new();
        assert_eq!(stats.inserts, 0);
        assert_eq!(stats.splits(), 0);
        assert_eq!(stats.splits_per_insert(), 0.0);
    }

    #[test]
    fn test_stats_ratio() {
        let stats = TreeStats {
            inserts: 10,
            node_splits: 3,
            root_splits: 2,
        };
        assert_eq!(stats.splits(), 5);
        assert_eq!(stats.splits_per_insert(), 0.5);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = TreeStats {
            inserts: 100,
            node_splits: 40,
            root_splits: 4,
        };

        stats.reset();

        assert_eq!(stats, TreeStats::new());
    }

    #[test]
    fn test_stats_display() {
        let stats = TreeStats {
            inserts: 4,
            node_splits: 1,
            root_splits: 1,
        };
        let display = format!("{}", stats);
        assert!(display.contains("inserts: 4"));
        assert!(display.contains("node_splits: 1"));
        assert!(display.contains("root_splits: 1"));
        assert!(display.contains("0.50"));
    }
}
