//! Sign extraction for floating-point and signed integer types.
//!
//! Two conventions are provided:
//!
//! | Function | `x < 0` | `x == 0` | `x > 0` | NaN |
//! |---|---|---|---|---|
//! | [`sign`] | −1 | 0 | 1 | NaN |
//! | [`indicator`] | −1 | 1 | 1 | NaN |
//!
//! Unlike [`f64::signum`], [`sign`] maps both `+0.0` and `-0.0` to `+0.0`.

/// Types with a three-way [`sign`] and a two-way [`indicator`].
///
/// Implemented for `f64`, `f32`, `i8`, `i16`, `i32` and `i64`.
pub trait Sign: Copy {
    /// `0` for zero, `1` for positive, `-1` for negative; NaN for NaN.
    fn sign(self) -> Self;

    /// `1` for non-negative, `-1` for negative; NaN for NaN.
    fn indicator(self) -> Self;
}

macro_rules! impl_sign_float {
    ($($t:ty),*) => {
        $(
            impl Sign for $t {
                fn sign(self) -> Self {
                    if self.is_nan() {
                        return <$t>::NAN;
                    }
                    if self == 0.0 {
                        0.0
                    } else if self > 0.0 {
                        1.0
                    } else {
                        -1.0
                    }
                }

                fn indicator(self) -> Self {
                    if self.is_nan() {
                        return <$t>::NAN;
                    }
                    if self >= 0.0 {
                        1.0
                    } else {
                        -1.0
                    }
                }
            }
        )*
    };
}

macro_rules! impl_sign_int {
    ($($t:ty),*) => {
        $(
            impl Sign for $t {
                fn sign(self) -> Self {
                    match self {
                        0 => 0,
                        x if x > 0 => 1,
                        _ => -1,
                    }
                }

                fn indicator(self) -> Self {
                    if self >= 0 {
                        1
                    } else {
                        -1
                    }
                }
            }
        )*
    };
}

impl_sign_float!(f64, f32);
impl_sign_int!(i8, i16, i32, i64);

/// Returns the sign of `x`: `0`, `1` or `-1` (NaN for NaN inputs).
///
/// # Examples
/// ```
/// use u_mathutil::sign;
/// assert_eq!(sign(-2.5_f64), -1.0);
/// assert_eq!(sign(-0.0_f64), 0.0);
/// assert_eq!(sign(7_i32), 1);
/// assert_eq!(sign(0_i8), 0);
/// assert!(sign(f32::NAN).is_nan());
/// ```
pub fn sign<T: Sign>(x: T) -> T {
    x.sign()
}

/// Returns `1` if `x >= 0`, `-1` otherwise (NaN for NaN inputs).
///
/// # Examples
/// ```
/// use u_mathutil::indicator;
/// assert_eq!(indicator(0_i64), 1);
/// assert_eq!(indicator(-3_i16), -1);
/// assert_eq!(indicator(-0.0_f64), 1.0);
/// ```
pub fn indicator<T: Sign>(x: T) -> T {
    x.indicator()
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- sign ---

    #[test]
    fn test_sign_f64() {
        assert_eq!(sign(3.0_f64), 1.0);
        assert_eq!(sign(-3.0_f64), -1.0);
        assert_eq!(sign(f64::INFINITY), 1.0);
        assert_eq!(sign(f64::NEG_INFINITY), -1.0);
        assert!(sign(f64::NAN).is_nan());
    }

    #[test]
    fn test_sign_zero_is_positive_zero() {
        assert_eq!(sign(0.0_f64).to_bits(), 0.0_f64.to_bits());
        assert_eq!(sign(-0.0_f64).to_bits(), 0.0_f64.to_bits());
        assert_eq!(sign(-0.0_f32).to_bits(), 0.0_f32.to_bits());
    }

    #[test]
    fn test_sign_f32() {
        assert_eq!(sign(2.0_f32), 1.0);
        assert_eq!(sign(-2.0_f32), -1.0);
        assert!(sign(f32::NAN).is_nan());
    }

    #[test]
    fn test_sign_integers() {
        assert_eq!(sign(3_i8), 1);
        assert_eq!(sign(i8::MIN), -1);
        assert_eq!(sign(0_i16), 0);
        assert_eq!(sign(-3_i16), -1);
        assert_eq!(sign(3_i32), 1);
        assert_eq!(sign(-3_i32), -1);
        assert_eq!(sign(0_i64), 0);
        assert_eq!(sign(i64::MAX), 1);
    }

    // --- indicator ---

    #[test]
    fn test_indicator_floats() {
        assert_eq!(indicator(0.0_f64), 1.0);
        assert_eq!(indicator(-0.0_f64), 1.0);
        assert_eq!(indicator(-1.0_f64), -1.0);
        assert_eq!(indicator(0.0_f32), 1.0);
        assert_eq!(indicator(-1e-30_f32), -1.0);
        assert!(indicator(f64::NAN).is_nan());
        assert!(indicator(f32::NAN).is_nan());
    }

    #[test]
    fn test_indicator_zero_is_one_for_every_int_width() {
        assert_eq!(indicator(0_i8), 1);
        assert_eq!(indicator(0_i16), 1);
        assert_eq!(indicator(0_i32), 1);
        assert_eq!(indicator(0_i64), 1);
    }

    #[test]
    fn test_indicator_negative_ints() {
        assert_eq!(indicator(-1_i8), -1);
        assert_eq!(indicator(-1_i16), -1);
        assert_eq!(indicator(-1_i32), -1);
        assert_eq!(indicator(i64::MIN), -1);
    }

    #[test]
    fn test_method_form() {
        assert_eq!((-5_i32).sign(), -1);
        assert_eq!(5.0_f64.indicator(), 1.0);
    }
}
