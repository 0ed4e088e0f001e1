//! Tree degree type.

use std::fmt;

use crate::common::config::{DEFAULT_DEGREE, MIN_DEGREE};
use crate::common::{Error, Result};

/// Maximum number of children a node may have.
///
/// All node fill bounds are derived from it:
/// - `max_keys` = degree - 1
/// - `min_keys` = (degree - 1) / 2, which is `degree / 2` for odd degrees
/// - `max_children` = degree
///
/// A `Degree` can only be built through [`Degree::new`], so every value in
/// circulation is at least [`MIN_DEGREE`].
///
/// # Example
/// ```
/// use b3rtree::Degree;
///
/// let degree = Degree::new(3).unwrap();
/// assert_eq!(degree.max_keys(), 2);
/// assert_eq!(degree.min_keys(), 1);
/// assert!(Degree::new(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Degree(usize);

impl Degree {
    /// The default degree (3).
    pub const DEFAULT: Degree = Degree(DEFAULT_DEGREE);

    /// Create a new Degree.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `degree` is below [`MIN_DEGREE`]
    pub fn new(degree: usize) -> Result<Self> {
        if degree < MIN_DEGREE {
            return Err(Error::InvalidDegree {
                degree,
                min: MIN_DEGREE,
            });
        }
        Ok(Degree(degree))
    }

    /// The raw degree value.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Most keys a node holds once an operation has returned.
    #[inline]
    pub fn max_keys(self) -> usize {
        self.0 - 1
    }

    /// Fewest keys a non-root node holds once an operation has returned.
    #[inline]
    pub fn min_keys(self) -> usize {
        (self.0 - 1) / 2
    }

    /// Most children an internal node holds.
    #[inline]
    pub fn max_children(self) -> usize {
        self.0
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Degree({})", self.0)
    }
}
