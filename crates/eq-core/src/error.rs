//! Error types for eq-core

use std::fmt;

use thiserror::Error;

/// Length constraint a buffer argument failed to meet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRequirement {
    /// Length must be exactly this many elements
    Exactly(usize),
    /// Length must be a whole multiple of this many elements
    MultipleOf(usize),
}

impl fmt::Display for LengthRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "== {n}"),
            Self::MultipleOf(n) => write!(f, "a multiple of {n}"),
        }
    }
}

/// Core error type
///
/// Unequal buffers are never an error; only inputs a strategy cannot accept are.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EqError {
    #[error("Invalid length for `{arg}`: length should be {expected}, got {actual}")]
    InvalidLength {
        arg: &'static str,
        expected: LengthRequirement,
        actual: usize,
    },
}

impl EqError {
    #[inline]
    pub(crate) fn check_exact(arg: &'static str, expected: usize, actual: usize) -> EqResult<()> {
        if actual == expected {
            Ok(())
        } else {
            Err(Self::InvalidLength {
                arg,
                expected: LengthRequirement::Exactly(expected),
                actual,
            })
        }
    }

    #[inline]
    pub(crate) fn check_multiple(arg: &'static str, unit: usize, actual: usize) -> EqResult<()> {
        if actual % unit == 0 {
            Ok(())
        } else {
            Err(Self::InvalidLength {
                arg,
                expected: LengthRequirement::MultipleOf(unit),
                actual,
            })
        }
    }
}

/// Result type alias
pub type EqResult<T> = Result<T, EqError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_message() {
        let err = EqError::check_exact("a", 16, 15).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid length for `a`: length should be == 16, got 15"
        );
    }

    #[test]
    fn test_multiple_message() {
        let err = EqError::check_multiple("bytes", 8, 13).unwrap_err();
        assert!(err.to_string().contains("a multiple of 8"));
        assert!(EqError::check_multiple("bytes", 8, 0).is_ok());
        assert!(EqError::check_multiple("bytes", 8, 64).is_ok());
    }
}
