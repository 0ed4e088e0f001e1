//! B-tree index implementation.
//!
//! An in-memory B-tree of `i32` keys with a configurable degree (3 by
//! default: at most 2 keys and 3 children per node).
//!
//! # Components
//! - [`BTree`] - Owns the root and implements every algorithm
//! - [`Node`] - Key/child storage, no balancing logic of its own
//! - [`TreeStats`] - Split/borrow/merge counters
//!
//! # Algorithms
//! - Insert descends to a leaf and splits overflowing nodes on the way
//!   back up; a root split adds a level.
//! - Delete tops up (borrow or merge) any child at minimum fill before
//!   descending into it; an emptied root is replaced by its only child.

mod delete;
mod node;
mod render;
mod stats;
mod tree;
mod validate;

pub use node::Node;
pub use stats::TreeStats;
pub use tree::BTree;
