//! BTree - the owning handle, insertion and read-only queries.
//!
//! Deletion lives in `delete.rs`, rendering in `render.rs` and invariant
//! checks in `validate.rs`; all of them are `impl BTree` blocks over the
//! same root.

use std::mem;

use tracing::{debug, trace};

use crate::common::{Degree, Error, Result};
use crate::index::btree::node::Node;
use crate::index::btree::stats::TreeStats;

/// An in-memory B-tree of `i32` keys.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────┐
/// │ BTree                                      │
/// │   degree: Degree      stats: TreeStats     │
/// │   root: Box<Node> ──▶ [ 10 ]               │
/// │                      /      \              │
/// │                  [ 6 ]      [ 20 ]         │
/// │                  /   \      /    \         │
/// │               [5]   [7] [12,17]  [30]      │
/// └────────────────────────────────────────────┘
/// ```
///
/// # Guarantees
/// After every public method returns:
/// - keys are in non-decreasing in-order sequence
/// - all leaves sit at the same depth
/// - every non-root node holds `min_keys..=max_keys` keys
///
/// Duplicate keys are kept as separate entries; [`BTree::delete`] removes
/// one instance per call.
///
/// # Usage
/// ```
/// use b3rtree::BTree;
///
/// let mut tree = BTree::new();
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
///
/// assert!(tree.search(12));
/// assert!(!tree.search(99));
/// assert_eq!(tree.min_value().unwrap(), 5);
/// assert_eq!(tree.max_value().unwrap(), 30);
/// ```
#[derive(Debug)]
pub struct BTree {
    /// Root node; an empty leaf for an empty tree.
    pub(crate) root: Box<Node>,

    /// Fill bounds for every node (immutable after construction).
    pub(crate) degree: Degree,

    /// Rebalancing counters.
    pub(crate) stats: TreeStats,
}

impl BTree {
    /// Create an empty tree of the default degree (3).
    pub fn new() -> Self {
        Self::with(Degree::DEFAULT)
    }

    /// Create an empty tree of the given degree.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `degree` is below 3
    pub fn with_degree(degree: usize) -> Result<Self> {
        Ok(Self::with(Degree::new(degree)?))
    }

    /// Create an empty tree from an already validated degree.
    pub fn with(degree: Degree) -> Self {
        Self {
            root: Box::new(Node::new()),
            degree,
            stats: TreeStats::new(),
        }
    }

    // ========================================================================
    // Public API: Info
    // ========================================================================

    /// The degree this tree was built with.
    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// True if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.size() == 0
    }

    /// Rebalancing counters since construction (or the last reset).
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    /// Zero the rebalancing counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert a key.
    ///
    /// Duplicates are stored as distinct entries after any equal keys.
    pub fn insert(&mut self, key: i32) {
        let degree = self.degree;
        insert_into(&mut self.root, key, degree, &mut self.stats);

        if self.root.size() > degree.max_keys() {
            // Grow by one level: the old root becomes the only child of a
            // fresh root, then splits like any other overflowing child.
            let old_root = mem::replace(&mut self.root, Box::new(Node::new()));
            self.root.children.push(old_root);
            split_child(&mut self.root, 0, degree);

            self.stats.splits += 1;
            self.stats.root_splits += 1;
            debug!(
                root = %self.root,
                height = self.height(),
                "btree.root_split"
            );
        }
    }

    // ========================================================================
    // Public API: Queries
    // ========================================================================

    /// Returns true if `key` is stored in the tree.
    pub fn search(&self, key: i32) -> bool {
        let mut node: &Node = &self.root;
        loop {
            // Number of keys <= key; the last of them is the candidate.
            let idx = node.keys.partition_point(|&k| k <= key);
            if idx > 0 && node.keys[idx - 1] == key {
                return true;
            }
            if node.is_leaf() {
                return false;
            }
            node = &node.children[idx];
        }
    }

    /// Smallest key in the tree.
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree holds no keys
    pub fn min_value(&self) -> Result<i32> {
        leftmost_leaf(&self.root).first_key().ok_or(Error::EmptyTree)
    }

    /// Largest key in the tree.
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree holds no keys
    pub fn max_value(&self) -> Result<i32> {
        rightmost_leaf(&self.root).last_key().ok_or(Error::EmptyTree)
    }

    /// Number of nodes, counting the root even when the tree is empty.
    pub fn node_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            1 + node.children().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// Number of keys, duplicates included.
    pub fn key_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            node.size() + node.children().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// Number of levels; 1 for a tree that is a single leaf.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node: &Node = &self.root;
        while let Some(child) = node.children.first() {
            node = child;
            height += 1;
        }
        height
    }

    /// All keys in sorted order.
    pub fn in_order(&self) -> Vec<i32> {
        fn walk(node: &Node, out: &mut Vec<i32>) {
            for (i, &key) in node.keys.iter().enumerate() {
                if let Some(child) = node.children.get(i) {
                    walk(child, out);
                }
                out.push(key);
            }
            if let Some(last) = node.children.get(node.size()) {
                walk(last, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }
}

impl Default for BTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<i32> for BTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<i32> for BTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = BTree::new();
        tree.extend(iter);
        tree
    }
}

// ============================================================================
// Internal: Insert path
// ============================================================================

/// Insert `key` below `node`, splitting any child that overflows on the
/// way back up. `node` itself may be left one key over; its parent (or
/// [`BTree::insert`] for the root) repairs that.
fn insert_into(node: &mut Node, key: i32, degree: Degree, stats: &mut TreeStats) {
    // Upper bound: equal keys stay in front of the new one.
    let idx = node.keys.partition_point(|&k| k <= key);

    if node.is_leaf() {
        node.keys.insert(idx, key);
        return;
    }

    insert_into(&mut node.children[idx], key, degree, stats);

    if node.children[idx].size() > degree.max_keys() {
        split_child(node, idx, degree);
        stats.splits += 1;
    }
}

/// Split the overflowing child at `index`.
///
/// The median (position `min_keys`) moves up into `parent` at `index`.
/// Keys after it, and for an internal child the children after slot
/// `min_keys + 1`, move into a new right sibling at `index + 1`.
pub(crate) fn split_child(parent: &mut Node, index: usize, degree: Degree) {
    let min_keys = degree.min_keys();

    let (median, sibling) = {
        let child = &mut parent.children[index];

        let mut sibling = Box::new(Node::new());
        sibling.keys.extend(child.keys.drain(min_keys + 1..));
        if !child.is_leaf() {
            sibling.children.extend(child.children.drain(min_keys + 1..));
        }

        // What remains is keys[..=min_keys]; the last one is the median.
        let median = child.keys.pop();
        (median, sibling)
    };

    let Some(median) = median else {
        return;
    };

    trace!(index, median, sibling = %sibling, "btree.split_child");
    parent.keys.insert(index, median);
    parent.children.insert(index + 1, sibling);
}

// ============================================================================
// Internal: Descent helpers
// ============================================================================

/// Follow the first child down to a leaf.
pub(crate) fn leftmost_leaf(mut node: &Node) -> &Node {
    while let Some(child) = node.children.first() {
        node = child;
    }
    node
}

/// Follow the last child down to a leaf.
pub(crate) fn rightmost_leaf(mut node: &Node) -> &Node {
    while let Some(child) = node.children.last() {
        node = child;
    }
    node
}
