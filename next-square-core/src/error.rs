//! Error types for perfect square checks
//!
//! A failed check is an ordinary outcome, not a fault, so every variant is
//! cheap to copy and compare.

use thiserror::Error;

/// Result type for checker operations
pub type Result<T> = std::result::Result<T, SquareError>;

/// Reasons a next square cannot be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareError {
    /// Input has no exact integer root
    #[error("not a perfect square: {value}")]
    NotPerfectSquare { value: i64 },

    /// Input is below zero
    #[error("negative input cannot be a perfect square: {value}")]
    Negative { value: i64 },

    /// Next square does not fit the output type
    #[error("next square after root {root} overflows")]
    Overflow { root: u64 },
}

impl SquareError {
    /// Value printed in legacy output in place of a failed result
    pub const SENTINEL: i64 = -1;

    /// Input that caused the failure, when there is one
    pub fn input(&self) -> Option<i64> {
        match self {
            Self::NotPerfectSquare { value } | Self::Negative { value } => Some(*value),
            Self::Overflow { .. } => None,
        }
    }

    pub fn sentinel(&self) -> i64 {
        Self::SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SquareError::NotPerfectSquare { value: 2 }.to_string(),
            "not a perfect square: 2"
        );
        assert_eq!(
            SquareError::Negative { value: -9 }.to_string(),
            "negative input cannot be a perfect square: -9"
        );
    }

    #[test]
    fn test_error_input() {
        assert_eq!(SquareError::NotPerfectSquare { value: 3 }.input(), Some(3));
        assert_eq!(SquareError::Negative { value: -4 }.input(), Some(-4));
        assert_eq!(SquareError::Overflow { root: 7 }.input(), None);
        assert_eq!(SquareError::Overflow { root: 7 }.sentinel(), -1);
    }
}
