//! Deletion with borrow/merge repair.
//!
//! Deletion descends once from the root. Before stepping into a child that
//! is already at `min_keys`, the child is topped up from a sibling
//! (`borrow_from_prev` / `borrow_from_next`) or merged with one, so the
//! node a key is finally removed from can always spare it. Only the root
//! may end up short, and an empty internal root is replaced by its only
//! child.
//!
//! For odd degrees a merge yields `2 * min_keys + 1 = max_keys + 1` keys.
//! When the deletion below does not take a key out of the merged node
//! itself, it is split again on the way back up; the parent gets back the
//! separator the merge took from it.

use std::mem;

use tracing::{debug, trace};

use crate::common::Degree;
use crate::index::btree::node::Node;
use crate::index::btree::stats::TreeStats;
use crate::index::btree::tree::{leftmost_leaf, rightmost_leaf, split_child, BTree};

impl BTree {
    /// Remove one instance of `key`.
    ///
    /// Returns true if an instance was removed. Deleting a key that is not
    /// present leaves the tree unchanged and returns false.
    pub fn delete(&mut self, key: i32) -> bool {
        let degree = self.degree;
        let removed = delete_key(&mut self.root, key, degree, &mut self.stats);

        if self.root.size() == 0 && !self.root.is_leaf() {
            // A merge emptied the root: its only child takes over.
            if let Some(child) = self.root.children.pop() {
                self.root = child;
                self.stats.root_collapses += 1;
                debug!(root = %self.root, height = self.height(), "btree.root_collapse");
            }
        }

        removed
    }
}

/// Remove one instance of `key` from the subtree rooted at `node`.
///
/// On entry `node` is the root or holds more than `min_keys` keys.
fn delete_key(node: &mut Node, key: i32, degree: Degree, stats: &mut TreeStats) -> bool {
    let idx = node.keys.partition_point(|&k| k < key);

    if idx < node.size() && node.keys[idx] == key {
        if node.is_leaf() {
            node.keys.remove(idx);
            return true;
        }
        return delete_from_internal(node, idx, degree, stats);
    }

    if node.is_leaf() {
        return false;
    }

    // Descending into the last child; a merge with its left sibling
    // shifts it one slot down.
    let was_last = idx == node.size();
    if node.children[idx].size() <= degree.min_keys() {
        fill(node, idx, degree, stats);
    }
    let target = if was_last && idx > node.size() {
        idx - 1
    } else {
        idx
    };

    delete_in_child(node, target, key, degree, stats)
}

/// Delete `key` below `node.children[idx]`, then split that child if it
/// is still over `max_keys` from a merge.
fn delete_in_child(node: &mut Node, idx: usize, key: i32, degree: Degree, stats: &mut TreeStats) -> bool {
    let removed = delete_key(&mut node.children[idx], key, degree, stats);

    if node.children[idx].size() > degree.max_keys() {
        split_child(node, idx, degree);
        stats.splits += 1;
        trace!(idx, "btree.resplit_after_merge");
    }

    removed
}

/// Remove `node.keys[idx]` where `node` is internal.
fn delete_from_internal(node: &mut Node, idx: usize, degree: Degree, stats: &mut TreeStats) -> bool {
    let key = node.keys[idx];
    let min_keys = degree.min_keys();

    if node.children[idx].size() > min_keys {
        if let Some(pred) = rightmost_leaf(&node.children[idx]).last_key() {
            node.keys[idx] = pred;
            return delete_in_child(node, idx, pred, degree, stats);
        }
    }

    if node.children[idx + 1].size() > min_keys {
        if let Some(succ) = leftmost_leaf(&node.children[idx + 1]).first_key() {
            node.keys[idx] = succ;
            return delete_in_child(node, idx + 1, succ, degree, stats);
        }
    }

    // Both neighbours are at the minimum: pull the key down between them.
    merge(node, idx, stats);
    delete_in_child(node, idx, key, degree, stats)
}

/// Make sure `parent.children[idx]` holds more than `min_keys` keys.
fn fill(parent: &mut Node, idx: usize, degree: Degree, stats: &mut TreeStats) {
    let min_keys = degree.min_keys();

    if idx > 0 && parent.children[idx - 1].size() > min_keys {
        borrow_from_prev(parent, idx, stats);
    } else if idx < parent.size() && parent.children[idx + 1].size() > min_keys {
        borrow_from_next(parent, idx, stats);
    } else if idx < parent.size() {
        merge(parent, idx, stats);
    } else {
        merge(parent, idx - 1, stats);
    }
}

/// Rotate the left sibling's last key through the parent separator into
/// the front of `children[idx]`, along with the sibling's last child.
fn borrow_from_prev(parent: &mut Node, idx: usize, stats: &mut TreeStats) {
    let (left, right) = parent.children.split_at_mut(idx);
    let sibling = &mut left[idx - 1];
    let child = &mut right[0];

    let Some(lifted) = sibling.keys.pop() else {
        return;
    };
    let separator = mem::replace(&mut parent.keys[idx - 1], lifted);
    child.keys.insert(0, separator);

    if let Some(grandchild) = sibling.children.pop() {
        child.children.insert(0, grandchild);
    }

    stats.borrows += 1;
    trace!(idx, separator, lifted, "btree.borrow_from_prev");
}

/// Rotate the right sibling's first key through the parent separator onto
/// the end of `children[idx]`, along with the sibling's first child.
fn borrow_from_next(parent: &mut Node, idx: usize, stats: &mut TreeStats) {
    let (left, right) = parent.children.split_at_mut(idx + 1);
    let child = &mut left[idx];
    let sibling = &mut right[0];

    if sibling.keys.is_empty() {
        return;
    }
    let lifted = sibling.keys.remove(0);
    let separator = mem::replace(&mut parent.keys[idx], lifted);
    child.keys.push(separator);

    if !sibling.is_leaf() {
        child.children.push(sibling.children.remove(0));
    }

    stats.borrows += 1;
    trace!(idx, separator, lifted, "btree.borrow_from_next");
}

/// Fold `keys[idx]` and `children[idx + 1]` into `children[idx]`.
///
/// The parent loses one key and one child; the sibling is freed.
fn merge(parent: &mut Node, idx: usize, stats: &mut TreeStats) {
    let separator = parent.keys.remove(idx);
    let sibling = parent.children.remove(idx + 1);
    let Node { keys, children } = *sibling;

    let child = &mut parent.children[idx];
    child.keys.push(separator);
    child.keys.extend(keys);
    child.children.extend(children);

    stats.merges += 1;
    trace!(idx, separator, merged = %child, "btree.merge");
}
