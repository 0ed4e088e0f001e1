//! Configuration constants for b3rtree.

/// Degree used when none is requested: at most 3 children and 2 keys per node.
///
/// This is the "B3R" shape, a 2-3 tree:
/// - Max keys per node: `DEFAULT_DEGREE - 1` = 2
/// - Min keys per non-root node: 1
pub const DEFAULT_DEGREE: usize = 3;

/// Smallest degree a tree may be built with.
///
/// Below 3 the minimum fill of a non-root node would drop to zero keys,
/// which leaves nothing to separate children with.
pub const MIN_DEGREE: usize = 3;

/// Inline key capacity of a node.
///
/// One slot above the default `max_keys` so a node can hold the extra key
/// between an overflowing insert (or a merge) and the repair that follows.
/// Larger degrees spill to the heap.
pub const INLINE_KEYS: usize = DEFAULT_DEGREE;

/// Inline child capacity of a node (one above the default `max_children`).
pub const INLINE_CHILDREN: usize = DEFAULT_DEGREE + 1;
