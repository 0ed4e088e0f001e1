//! Rebalancing statistics.

use std::fmt;

/// Counters for the structural repairs a tree has performed.
///
/// Every split, borrow and merge bumps one counter, so the numbers show
/// how much rebalancing a workload causes. The tree is single-owner, so
/// plain integers suffice.
///
/// # Example
/// ```
/// use b3rtree::BTree;
///
/// let mut tree = BTree::new();
/// for key in 1..=3 {
///     tree.insert(key);
/// }
/// let stats = tree.stats();
/// assert_eq!(stats.splits, 1);
/// assert_eq!(stats.root_splits, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Nodes split on insert (root splits included).
    pub splits: u64,

    /// Splits that grew the tree by one level.
    pub root_splits: u64,

    /// Keys rotated in from a sibling during delete.
    pub borrows: u64,

    /// Sibling pairs folded into one node during delete.
    pub merges: u64,

    /// Empty internal roots replaced by their only child.
    pub root_collapses: u64,
}

impl TreeStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of structural repairs of any kind.
    pub fn total_rebalances(&self) -> u64 {
        self.splits + self.borrows + self.merges
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
            "Stats {{ splits: {}, root_splits: {}, borrows: {}, merges: {}, root_collapses: {} }}",
            self.splits, self.root_splits, self.borrows, self.merges, self.root_collapses
        )
    }
}
