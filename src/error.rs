//! Error type shared by the fallible functions of this crate.

use thiserror::Error;

/// Errors raised by the factorial and binomial coefficient families.
///
/// Floating-point special values (NaN, ±∞) are never reported through this
/// type; they propagate through the arithmetic instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// An argument is outside the function's domain (`n <= 0`, `n < k`, `k < 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The result does not fit in an `i64`.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}
