//! Integration tests for the B-tree.
//!
//! These tests drive the public API through longer operation sequences
//! than the unit tests and check the structure with `validate()` after
//! every step.

use b3rtree::{BTree, Degree, Error};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn build(keys: impl IntoIterator<Item = i32>) -> BTree {
    let mut tree = BTree::new();
    for key in keys {
        tree.insert(key);
        tree.validate().unwrap();
    }
    tree
}

/// Depth of every leaf, left to right.
fn leaf_depths(tree: &BTree) -> Vec<usize> {
    fn walk(node: &b3rtree::Node, depth: usize, out: &mut Vec<usize>) {
        if node.is_leaf() {
            out.push(depth);
        }
        for child in node.children() {
            walk(child, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(tree.root(), 0, &mut out);
    out
}

// ============================================================================
// Reference scenarios
// ============================================================================

/// 10, 20, 5, 6, 12, 30, 7, 17 into a fresh degree-3 tree.
#[test]
fn test_reference_insert_sequence() {
    let tree = build([10, 20, 5, 6, 12, 30, 7, 17]);

    assert_eq!(tree.min_value().unwrap(), 5);
    assert_eq!(tree.max_value().unwrap(), 30);
    assert!(tree.search(12));
    assert!(!tree.search(99));

    assert_eq!(tree.root().keys(), &[10]);
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.key_count(), 8);
    assert_eq!(tree.in_order(), vec![5, 6, 7, 10, 12, 17, 20, 30]);
}

/// An empty tree has no extremes.
#[test]
fn test_empty_tree_extremes() {
    let tree = BTree::new();
    assert!(matches!(tree.min_value(), Err(Error::EmptyTree)));
    assert!(matches!(tree.max_value(), Err(Error::EmptyTree)));
    assert_eq!(tree.node_count(), 1);
}

/// 1..=7 then delete 4.
#[test]
fn test_sequential_then_delete_middle() {
    let mut tree = build(1..=7);

    assert!(tree.delete(4));
    tree.validate().unwrap();

    assert!(!tree.search(4));
    assert_eq!(tree.key_count(), 6);
    let depths = leaf_depths(&tree);
    assert!(depths.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_invalid_degree() {
    for degree in [0, 1, 2] {
        assert!(matches!(
            BTree::with_degree(degree),
            Err(Error::InvalidDegree { .. })
        ));
    }
}

// ============================================================================
// Longer workloads
// ============================================================================

#[test]
fn test_ascending_and_descending_inserts() {
    let up = build(0..500);
    let down = build((0..500).rev());

    assert_eq!(up.in_order(), (0..500).collect::<Vec<_>>());
    assert_eq!(down.in_order(), up.in_order());
    assert_eq!(up.key_count(), 500);
    // A 2-3 tree of 500 keys needs between 6 and 9 levels.
    assert!((6..=9).contains(&up.height()));
}

#[test]
fn test_random_workload_matches_model() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xB3_7EE);
    let mut tree = BTree::new();
    let mut model: Vec<i32> = Vec::new();

    for step in 0..3_000 {
        let key = rng.gen_range(-50..50);
        if rng.gen_bool(0.55) {
            tree.insert(key);
            let pos = model.partition_point(|&k| k <= key);
            model.insert(pos, key);
        } else {
            let expected = match model.binary_search(&key) {
                Ok(pos) => {
                    model.remove(pos);
                    true
                }
                Err(_) => false,
            };
            assert_eq!(tree.delete(key), expected, "step {} delete {}", step, key);
        }

        if step % 50 == 0 {
            tree.validate().unwrap();
            assert_eq!(tree.in_order(), model);
        }
    }

    tree.validate().unwrap();
    assert_eq!(tree.in_order(), model);
    assert_eq!(tree.key_count(), model.len());
}

#[test]
fn test_shuffled_insert_then_drain() {
    let mut keys: Vec<i32> = (0..1_000).collect();
    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(7));
    let mut tree = build(keys.iter().copied());

    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(8));
    for (removed, key) in keys.iter().enumerate() {
        assert!(tree.delete(*key));
        assert!(!tree.search(*key));
        assert_eq!(tree.key_count(), keys.len() - removed - 1);
    }

    tree.validate().unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.stats().root_splits, tree.stats().root_collapses);
}

#[test]
fn test_other_degrees() {
    for degree in [4, 5, 8] {
        let mut tree = BTree::with(Degree::new(degree).unwrap());
        tree.extend((0..300).map(|k| (k * 37) % 300));
        tree.validate().unwrap();
        assert_eq!(tree.in_order(), (0..300).collect::<Vec<_>>());

        for key in (0..300).step_by(3) {
            assert!(tree.delete(key));
        }
        tree.validate().unwrap();
        assert_eq!(tree.key_count(), 200);
    }
}

#[test]
fn test_render_lists_every_key_once() {
    let tree = build([15, 3, 9, 27, 1, 12, 21]);
    let rendered = tree.render();

    let keys: Vec<i32> = rendered
        .lines()
        .map(|line| {
            let inner = line.trim().trim_start_matches('(').trim_end_matches(')');
            inner.split(", ").next().unwrap().parse().unwrap()
        })
        .collect();
    assert_eq!(keys, tree.in_order());
}
