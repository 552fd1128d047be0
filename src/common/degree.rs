//! Validated B-tree degree.

use std::fmt;

use crate::common::config::{DEFAULT_DEGREE, MAX_DEGREE, MIN_DEGREE};
use crate::common::{Error, Result};

/// The order of a B-tree.
///
/// A node may hold at most `degree - 1` keys once an insert has finished,
/// and therefore at most `degree` children. Reaching `degree` keys is what
/// triggers a split.
///
/// # Example
/// ```
/// use arbor::Degree;
///
/// let degree = Degree::new(4).unwrap();
/// assert_eq!(degree.get(), 4);
/// assert_eq!(degree.max_keys(), 3);
///
/// assert!(Degree::new(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Degree(usize);

impl Degree {
    /// Degree used by `BTree::default()`.
    pub const DEFAULT: Degree = Degree(DEFAULT_DEGREE);

    /// Validate and wrap a degree.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `degree` is outside `MIN_DEGREE..=MAX_DEGREE`
    pub fn new(degree: usize) -> Result<Self> {
        if !(MIN_DEGREE..=MAX_DEGREE).contains(&degree) {
            return Err(Error::InvalidDegree(degree));
        }
        Ok(Degree(degree))
    }

    /// The raw degree value.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Most keys a node may hold between inserts.
    #[inline]
    pub fn max_keys(self) -> usize {
        self.0 - 1
    }

    /// Check whether a node with `key_count` keys must split.
    #[inline]
    pub fn is_overfull(self, key_count: usize) -> bool {
        key_count >= self.0
    }
}

impl TryFrom<usize> for Degree {
    type Error = Error;

    fn try_from(degree: usize) -> Result<Self> {
        Degree::new(degree)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Degree({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_accepts_bounds() {
        for d in MIN_DEGREE..=MAX_DEGREE {
            assert_eq!(Degree::new(d).unwrap().get(), d);
        }
    }

    #[test]
    fn test_degree_rejects_out_of_range() {
        assert_eq!(Degree::new(0), Err(Error::InvalidDegree(0)));
        assert_eq!(Degree::new(2), Err(Error::InvalidDegree(2)));
        assert_eq!(Degree::new(8), Err(Error::InvalidDegree(8)));
        assert_eq!(Degree::new(usize::MAX), Err(Error::InvalidDegree(usize::MAX)));
    }

    #[test]
    fn test_degree_overfull() {
        let d = Degree::new(3).unwrap();
        assert_eq!(d.max_keys(), 2);
        assert!(!d.is_overfull(2));
        assert!(d.is_overfull(3));
    }

    #[test]
    fn test_default_degree_is_valid() {
        assert_eq!(Degree::new(DEFAULT_DEGREE), Ok(Degree::DEFAULT));
    }

    #[test]
    fn test_degree_try_from() {
        let d: Degree = 5usize.try_into().unwrap();
        assert_eq!(d.get(), 5);
        assert!(Degree::try_from(9usize).is_err());
    }

    #[test]
    fn test_degree_display() {
        assert_eq!(format!("{}", Degree::new(7).unwrap()), "Degree(7)");
    }
}
