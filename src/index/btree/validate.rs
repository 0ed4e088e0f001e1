//! Structural invariant checks.

use crate::common::{Error, Result};
use crate::index::btree::node::Node;
use crate::index::btree::tree::BTree;

impl BTree {
    /// Check every structural invariant of the tree.
    ///
    /// Verified:
    /// - keys within each node are non-decreasing
    /// - internal nodes have exactly `size + 1` children
    /// - every subtree lies between its separating keys
    /// - non-root nodes hold `min_keys..=max_keys` keys, the root at most
    ///   `max_keys`
    /// - all leaves are at the same depth
    ///
    /// # Errors
    /// - `Error::Corrupted` describing the first violation found
    pub fn validate(&self) -> Result<()> {
        let mut leaf_depth = None;
        self.validate_node(&self.root, 0, None, None, &mut leaf_depth)
    }

    fn validate_node(
        &self,
        node: &Node,
        depth: usize,
        lower: Option<i32>,
        upper: Option<i32>,
        leaf_depth: &mut Option<usize>,
    ) -> Result<()> {
        let size = node.size();

        if size > self.degree.max_keys() {
            return Err(corrupted(node, depth, "holds more than max_keys keys"));
        }
        if depth > 0 && size < self.degree.min_keys() {
            return Err(corrupted(node, depth, "holds fewer than min_keys keys"));
        }
        if node.keys().windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(corrupted(node, depth, "keys out of order"));
        }
        if let (Some(lower), Some(first)) = (lower, node.first_key()) {
            if first < lower {
                return Err(corrupted(node, depth, "key below its separator"));
            }
        }
        if let (Some(upper), Some(last)) = (upper, node.last_key()) {
            if last > upper {
                return Err(corrupted(node, depth, "key above its separator"));
            }
        }

        if node.is_leaf() {
            return match *leaf_depth {
                None => {
                    *leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(Error::Corrupted(format!(
                    "leaf {} at depth {} but other leaves at depth {}",
                    node, depth, expected
                ))),
            };
        }

        if node.children().len() != size + 1 {
            return Err(corrupted(node, depth, "child count is not size + 1"));
        }

        for (i, child) in node.children().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(node.keys()[i - 1]) };
            let child_upper = if i == size { upper } else { Some(node.keys()[i]) };
            self.validate_node(child, depth + 1, child_lower, child_upper, leaf_depth)?;
        }

        Ok(())
    }
}

fn corrupted(node: &Node, depth: usize, reason: &str) -> Error {
    Error::Corrupted(format!("node {} at depth {} {}", node, depth, reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal(keys: &[i32], children: Vec<Node>) -> Node {
        let mut node = Node::leaf_from(keys);
        node.children.extend(children.into_iter().map(Box::new));
        node
    }

    fn tree_with_root(root: Node) -> BTree {
        let mut tree = BTree::new();
        tree.root = Box::new(root);
        tree
    }

    #[test]
    fn test_validate_valid_trees() {
        assert!(BTree::new().validate().is_ok());

        let tree: BTree = (0..200).rev().collect();
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_validate_detects_unsorted_keys() {
        let tree = tree_with_root(Node::leaf_from(&[9, 3]));
        let err = tree.validate().unwrap_err();
        assert!(err.to_string().contains("out of order"));
    }

    #[test]
    fn test_validate_detects_overfull_node() {
        let tree = tree_with_root(Node::leaf_from(&[1, 2, 3]));
        assert!(matches!(tree.validate(), Err(Error::Corrupted(_))));
    }

    #[test]
    fn test_validate_detects_underfull_child() {
        let root = internal(&[5], vec![Node::new(), Node::leaf_from(&[7])]);
        let err = tree_with_root(root).validate().unwrap_err();
        assert!(err.to_string().contains("fewer than min_keys"));
    }

    #[test]
    fn test_validate_detects_separator_violation() {
        let root = internal(&[5], vec![Node::leaf_from(&[6]), Node::leaf_from(&[7])]);
        let err = tree_with_root(root).validate().unwrap_err();
        assert!(err.to_string().contains("above its separator"));
    }

    #[test]
    fn test_validate_detects_unbalanced_leaves() {
        let left = internal(&[2], vec![Node::leaf_from(&[1]), Node::leaf_from(&[3])]);
        let root = internal(&[5], vec![left, Node::leaf_from(&[7])]);
        let err = tree_with_root(root).validate().unwrap_err();
        assert!(err.to_string().contains("depth"));
    }

    #[test]
    fn test_validate_detects_missing_child() {
        let root = internal(&[5, 9], vec![Node::leaf_from(&[1]), Node::leaf_from(&[7])]);
        let err = tree_with_root(root).validate().unwrap_err();
        assert!(err.to_string().contains("child count"));
    }
}
