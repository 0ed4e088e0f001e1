//! Index structures.
//!
//! - [`btree`] - In-memory B-tree over `i32` keys

pub mod btree;

pub use btree::{BTree, Node, TreeStats};
