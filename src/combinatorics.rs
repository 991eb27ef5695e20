//! Factorials and binomial coefficients computed in log space.
//!
//! # Algorithm
//!
//! `n!` overflows an `i64` for `n > 20` and an `f64` for `n > 170`. All values
//! here are first computed as a sum of logarithms,
//!
//! ```text
//! ln n!      = Σ_{i=2}^{n} ln i
//! ln C(n, k) = Σ_{i=k+1}^{n} ln i − Σ_{i=2}^{n−k} ln i
//! ```
//!
//! and exponentiated once at the end. The individual factorials of
//! `C(n, k) = n! / (k! (n−k)!)` are never materialized, so the log forms stay
//! finite far beyond the range of the integer and `f64` results.
//!
//! # Precision
//!
//! The log-sum carries a relative error of a few ulps per term, which the
//! final `exp` turns into a relative error of the result. Integer results are
//! exact while that error stays below one half, i.e. for `n!` up to about
//! `n = 15` and for `C(n, k)` well past `n = 30`.
//!
//! # Overflow detection
//!
//! The `i64` results round the `f64` value with a saturating cast. Every value
//! at or above `2⁶³` saturates to `i64::MAX`, which is reported as
//! [`MathError::Overflow`].

use crate::error::MathError;

/// Σ ln(i) for i in `lo..=hi`. Zero for an empty range.
fn log_sum(lo: i32, hi: i32) -> f64 {
    (lo..=hi).map(|i| f64::from(i).ln()).sum()
}

/// Rounds half up (`floor(x + 0.5)`), saturating at the `i64` bounds.
fn round_to_i64(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

fn check_factorial_arg(n: i32) -> Result<(), MathError> {
    if n <= 0 {
        return Err(MathError::InvalidArgument(format!(
            "must have n > 0 for n!, got n={n}"
        )));
    }
    Ok(())
}

fn check_binomial_args(n: i32, k: i32) -> Result<(), MathError> {
    if n < k {
        return Err(MathError::InvalidArgument(format!(
            "must have n >= k for binomial coefficient (n,k), got n={n}, k={k}"
        )));
    }
    if n <= 0 {
        return Err(MathError::InvalidArgument(format!(
            "must have n > 0 for binomial coefficient (n,k), got n={n}"
        )));
    }
    if k < 0 {
        return Err(MathError::InvalidArgument(format!(
            "must have k >= 0 for binomial coefficient (n,k), got k={k}"
        )));
    }
    Ok(())
}

fn narrow(value: f64) -> Result<i64, MathError> {
    let result = round_to_i64(value);
    if result == i64::MAX {
        return Err(MathError::Overflow(
            "result too large to represent in an i64".into(),
        ));
    }
    Ok(result)
}

// ============================================================================
// Factorial
// ============================================================================

/// Natural logarithm of `n!`.
///
/// # Errors
/// [`MathError::InvalidArgument`] if `n <= 0`.
///
/// # Examples
/// ```
/// use u_mathutil::combinatorics::factorial_log;
/// assert!((factorial_log(5).unwrap() - 120.0_f64.ln()).abs() < 1e-12);
/// // 1000! is far outside f64, its log is not.
/// assert!(factorial_log(1000).unwrap().is_finite());
/// ```
pub fn factorial_log(n: i32) -> Result<f64, MathError> {
    check_factorial_arg(n)?;
    Ok(log_sum(2, n))
}

/// `n!` as an integer-valued `f64`.
///
/// # Returns
/// `f64::INFINITY` once `n!` exceeds `f64::MAX` (`n > 170`).
///
/// # Errors
/// [`MathError::InvalidArgument`] if `n <= 0`.
pub fn factorial_double(n: i32) -> Result<f64, MathError> {
    let log = factorial_log(n)?;
    Ok((log.exp() + 0.5).floor())
}

/// `n!` as an `i64`.
///
/// # Errors
/// - [`MathError::InvalidArgument`] if `n <= 0`.
/// - [`MathError::Overflow`] if `n!` does not fit in an `i64` (`n > 20`).
///
/// # Examples
/// ```
/// use u_mathutil::combinatorics::factorial;
/// use u_mathutil::MathError;
/// assert_eq!(factorial(5), Ok(120));
/// assert!(matches!(factorial(0), Err(MathError::InvalidArgument(_))));
/// assert!(matches!(factorial(21), Err(MathError::Overflow(_))));
/// ```
pub fn factorial(n: i32) -> Result<i64, MathError> {
    narrow(factorial_double(n)?)
}

// ============================================================================
// Binomial coefficient
// ============================================================================

/// Natural logarithm of the binomial coefficient `C(n, k)`.
///
/// # Errors
/// [`MathError::InvalidArgument`] unless `0 <= k <= n` and `n > 0`.
///
/// # Examples
/// ```
/// use u_mathutil::combinatorics::binomial_coefficient_log;
/// let log = binomial_coefficient_log(5, 2).unwrap();
/// assert!((log - 10.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn binomial_coefficient_log(n: i32, k: i32) -> Result<f64, MathError> {
    check_binomial_args(n, k)?;
    if n == k || k == 0 {
        return Ok(0.0);
    }
    if k == 1 || k == n - 1 {
        return Ok(f64::from(n).ln());
    }
    // ln(n!/k!) − ln((n−k)!)
    Ok(log_sum(k + 1, n) - log_sum(2, n - k))
}

/// `C(n, k)` as an integer-valued `f64`.
///
/// # Errors
/// [`MathError::InvalidArgument`] unless `0 <= k <= n` and `n > 0`.
pub fn binomial_coefficient_double(n: i32, k: i32) -> Result<f64, MathError> {
    let log = binomial_coefficient_log(n, k)?;
    Ok((log.exp() + 0.5).floor())
}

/// `C(n, k)`, the number of `k`-element subsets of an `n`-element set.
///
/// # Errors
/// - [`MathError::InvalidArgument`] unless `0 <= k <= n` and `n > 0`.
/// - [`MathError::Overflow`] if the result does not fit in an `i64`.
///
/// # Examples
/// ```
/// use u_mathutil::combinatorics::binomial_coefficient;
/// assert_eq!(binomial_coefficient(5, 2), Ok(10));
/// assert_eq!(binomial_coefficient(10, 0), Ok(1));
/// assert_eq!(binomial_coefficient(10, 1), Ok(10));
/// assert!(binomial_coefficient(3, 5).is_err());
/// ```
pub fn binomial_coefficient(n: i32, k: i32) -> Result<i64, MathError> {
    check_binomial_args(n, k)?;
    if n == k || k == 0 {
        return Ok(1);
    }
    if k == 1 || k == n - 1 {
        return Ok(i64::from(n));
    }
    narrow(binomial_coefficient_double(n, k)?)
}
