//! Error types for arbor.

use thiserror::Error;

use crate::common::config::{MAX_DEGREE, MIN_DEGREE};

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in arbor.
///
/// Only construction can fail. Every other operation on the tree and the
/// list is total: out-of-range positions come back as `None` or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested B-tree degree is outside `MIN_DEGREE..=MAX_DEGREE`.
    #[error("invalid degree {0}: must be between {} and {}", MIN_DEGREE, MAX_DEGREE)]
    InvalidDegree(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDegree(2);
        assert_eq!(format!("{}", err), "invalid degree 2: must be between 3 and 7");

        let err = Error::InvalidDegree(8);
        assert_eq!(format!("{}", err), "invalid degree 8: must be between 3 and 7");
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_std_error(_: &dyn std::error::Error) {}
        takes_std_error(&Error::InvalidDegree(0));
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail(degree: usize) -> Result<usize> {
            if degree < MIN_DEGREE {
                return Err(Error::InvalidDegree(degree));
            }
            Ok(degree)
        }

        assert_eq!(might_fail(4), Ok(4));
        assert_eq!(might_fail(1), Err(Error::InvalidDegree(1)));
    }
}
