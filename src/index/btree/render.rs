//! Depth-annotated text dump of a tree.

use std::fmt::{self, Write};

use crate::index::btree::node::Node;
use crate::index::btree::tree::BTree;

/// Spaces of indentation per level.
const INDENT: usize = 2;

impl BTree {
    /// Render every key as a `(key, depth)` line, in key order.
    ///
    /// Children are interleaved between their parent's keys and each line
    /// is indented by its depth, so the output reads as the tree turned on
    /// its side. The root is depth 0. An empty tree renders as "".
    ///
    /// # Example
    /// ```
    /// use b3rtree::BTree;
    ///
    /// let tree: BTree = [10, 20, 5].into_iter().collect();
    /// assert_eq!(tree.render(), "  (5, 1)\n(10, 0)\n  (20, 1)\n");
    /// ```
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_node(&self.root, 0, f)
    }
}

fn render_node<W: Write>(node: &Node, depth: usize, out: &mut W) -> fmt::Result {
    for (i, key) in node.keys.iter().enumerate() {
        if let Some(child) = node.children.get(i) {
            render_node(child, depth + 1, out)?;
        }
        writeln!(out, "{:indent$}({}, {})", "", key, depth, indent = depth * INDENT)?;
    }
    if let Some(last) = node.children.get(node.size()) {
        render_node(last, depth + 1, out)?;
    }
    Ok(())
}
