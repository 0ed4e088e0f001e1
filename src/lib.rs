//! b3rtree - An in-memory B-tree of configurable degree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            b3rtree                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Script Layer (script/)                      │   │
//! │  │         Command parser → Interpreter → report lines      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/btree/)                  │   │
//! │  │   BTree: insert/split · delete/borrow/merge · queries    │   │
//! │  │   Node: sorted keys + owned children (inline storage)    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Common (common/)                            │   │
//! │  │          Degree · Error/Result · config constants        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Degree, Error, config)
//! - [`index`] - The B-tree and its nodes
//! - [`script`] - Op-code script interpreter driving a tree
//!
//! # Quick Start
//! ```
//! use b3rtree::BTree;
//!
//! let mut tree = BTree::new();
//! for key in 1..=7 {
//!     tree.insert(key);
//! }
//! tree.delete(4);
//!
//! assert!(!tree.search(4));
//! assert_eq!(tree.key_count(), 6);
//! assert!(tree.validate().is_ok());
//! ```

pub mod common;
pub mod index;
pub mod script;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_DEGREE;
pub use common::{Degree, Error, Result};

pub use index::{BTree, Node, TreeStats};
