//! Hyperbolic functions built from the exponential.
//!
//! Both functions evaluate `eˣ` and `e⁻ˣ` separately. `sinh` loses relative
//! precision near zero (catastrophic cancellation), and both overflow to `±∞`
//! once `|x|` exceeds `ln(f64::MAX) ≈ 709.78`. Use [`f64::sinh`] where that
//! matters.

/// Hyperbolic cosine `(eˣ + e⁻ˣ) / 2`.
///
/// # Examples
/// ```
/// use u_mathutil::hyperbolic::cosh;
/// assert_eq!(cosh(0.0), 1.0);
/// assert!((cosh(1.0) - 1.5430806348152437).abs() < 1e-15);
/// ```
pub fn cosh(x: f64) -> f64 {
    (x.exp() + (-x).exp()) / 2.0
}

/// Hyperbolic sine `(eˣ − e⁻ˣ) / 2`.
///
/// # Examples
/// ```
/// use u_mathutil::hyperbolic::sinh;
/// assert_eq!(sinh(0.0), 0.0);
/// assert!((sinh(1.0) - 1.1752011936438014).abs() < 1e-15);
/// ```
pub fn sinh(x: f64) -> f64 {
    (x.exp() - (-x).exp()) / 2.0
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn cosh_at_least_one(x in -700.0_f64..700.0) {
            prop_assert!(cosh(x) >= 1.0 - 1e-15, "cosh({x}) = {}", cosh(x));
        }

        #[test]
        fn pythagorean_identity(x in -3.0_f64..3.0) {
            let c = cosh(x);
            let s = sinh(x);
            prop_assert!((c * c - s * s - 1.0).abs() < 1e-12, "x={x}");
        }
    }
}
