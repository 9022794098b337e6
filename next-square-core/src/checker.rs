//! Perfect square detection and next-square computation

use crate::error::{Result, SquareError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Exact integer root of `n`, or `None` if `n` is not a perfect square
pub fn perfect_square_root(n: i64) -> Option<u64> {
    let n = u64::try_from(n).ok()?;
    let root = n.isqrt();
    (root.checked_mul(root)? == n).then_some(root)
}

pub fn is_perfect_square(n: i64) -> bool {
    perfect_square_root(n).is_some()
}

/// Next perfect square strictly above `n`.
///
/// Only defined when `n` is itself a perfect square. The root is found with
/// integer arithmetic and verified by squaring it back, so large inputs are
/// never misclassified by floating-point rounding.
///
/// ```
/// use next_square_core::{SquareError, find_next_square};
///
/// assert_eq!(find_next_square(4), Ok(9));
/// assert_eq!(find_next_square(2), Err(SquareError::NotPerfectSquare { value: 2 }));
/// ```
pub fn find_next_square(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(SquareError::Negative { value: n });
    }

    let root = perfect_square_root(n).ok_or(SquareError::NotPerfectSquare { value: n })?;

    // (isqrt(i64::MAX) + 1)^2 still fits in u64
    let next = root
        .checked_add(1)
        .and_then(|r| r.checked_mul(r))
        .ok_or(SquareError::Overflow { root })?;

    debug!(input = n, root, next, "Found next perfect square");
    Ok(next)
}

/// Result of evaluating a single input, in a form that can be serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareOutcome {
    pub input: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_square: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SquareOutcome {
    pub fn evaluate(input: i64) -> Self {
        match find_next_square(input) {
            Ok(next) => Self { input, next_square: Some(next), error: None },
            Err(e) => {
                debug!(input, error = %e, "Input rejected");
                Self { input, next_square: None, error: Some(e.to_string()) }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.next_square.is_some()
    }
}
