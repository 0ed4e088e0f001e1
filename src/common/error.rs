//! Error types for b3rtree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in b3rtree.
///
/// Most tree operations cannot fail: searching for or deleting a missing
/// key is not an error. Only extremum lookups, construction with an
/// explicit degree, invariant validation and the script runner report
/// errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Min/max was requested from a tree holding zero keys.
    #[error("Tree is empty")]
    EmptyTree,

    /// A tree was requested with a degree too small to keep non-root
    /// nodes at one key or more.
    #[error("Invalid degree {degree}: must be at least {min}")]
    InvalidDegree { degree: usize, min: usize },

    /// A structural invariant does not hold.
    ///
    /// This indicates a bug in the tree algorithms.
    #[error("Tree invariant violated: {0}")]
    Corrupted(String),

    /// I/O error while reading a script or writing its output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A script line could not be parsed.
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
