//! Node - a single record in the B-tree.
//!
//! A [`Node`] holds:
//! - Up to `max_keys` sorted keys
//! - Up to `max_children` owned children (internal nodes only)
//!
//! Nodes know nothing about degree or balance. The tree algorithms in this
//! module are the only code that mutates them.

use std::fmt;

use smallvec::SmallVec;

use crate::common::config::{INLINE_CHILDREN, INLINE_KEYS};

/// A node in the B-tree.
///
/// # Layout
/// ```text
///            keys:   [ k0 | k1 ]
///                   /     |     \
/// children:  [ <=k0 ] [k0..k1] [ >=k1 ]
/// ```
///
/// Children are owned through `Box`, so each node has exactly one owner:
/// the tree (for the root) or a slot in its parent's `children`.
///
/// Storage is inline for the default degree, with one spare slot for the
/// transient overflow during insert and merge.
#[derive(Debug, Default)]
pub struct Node {
    /// Keys in non-decreasing order. `keys.len()` is the live size.
    pub(crate) keys: SmallVec<[i32; INLINE_KEYS]>,

    /// Owned subtrees; empty for a leaf, `keys.len() + 1` entries otherwise.
    pub(crate) children: SmallVec<[Box<Node>; INLINE_CHILDREN]>,
}

impl Node {
    /// Create an empty leaf.
    pub fn new() -> Self {
        Self {
            keys: SmallVec::new(),
            children: SmallVec::new(),
        }
    }

    /// Create a leaf holding the given keys.
    ///
    /// The caller is responsible for passing them sorted.
    #[cfg(test)]
    pub(crate) fn leaf_from(keys: &[i32]) -> Self {
        Self {
            keys: SmallVec::from_slice(keys),
            children: SmallVec::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of live keys.
    #[inline]
    pub fn size(&self) -> usize {
        self.keys.len()
    }

    /// True iff the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Live keys in order.
    #[inline]
    pub fn keys(&self) -> &[i32] {
        &self.keys
    }

    /// Child subtrees in order (empty for a leaf).
    #[inline]
    pub fn children(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.children.iter().map(|child| child.as_ref())
    }

    /// Smallest key held directly by this node.
    #[inline]
    pub fn first_key(&self) -> Option<i32> {
        self.keys.first().copied()
    }

    /// Largest key held directly by this node.
    #[inline]
    pub fn last_key(&self) -> Option<i32> {
        self.keys.last().copied()
    }
}

impl fmt::Display for Node {
    /// Formats the keys as `[k1, k2]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "]")
    }
}
