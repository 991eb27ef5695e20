//! Complex numbers over `f64` with canonical-NaN propagation.
//!
//! # Algorithms
//!
//! - **Multiplication**: Gauss's three-multiplication product. The imaginary
//!   part is recovered as `(a+b)(c+d) − ac − bd`, trading one multiplication
//!   for two additions.
//! - **Division**: Smith's algorithm. Branching on the larger divisor
//!   component keeps the intermediate quotient in `[-1, 1]`, which avoids the
//!   overflow/underflow of the textbook `(a+bi)(c−di)/(c²+d²)` formula.
//!   Reference: Smith (1962), "Algorithm 116: Complex Division",
//!   *Communications of the ACM* 5(8).
//!
//! # NaN semantics
//!
//! A value is NaN if either component is NaN. Every arithmetic operation with
//! a NaN operand returns [`Complex::NAN`] rather than a partially-NaN pair.
//! Equality is bit-exact, so `Complex::NAN == Complex::NAN` holds.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Immutable complex number `real + imaginary·i`.
///
/// # Examples
/// ```
/// use u_mathutil::Complex;
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.abs(), 5.0);
/// assert_eq!(z.conjugate(), Complex::new(3.0, -4.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    real: f64,
    imaginary: f64,
}

impl Complex {
    /// The imaginary unit `i = (0, 1)`.
    pub const I: Self = Self::new(0.0, 1.0);

    /// The canonical NaN value `(NaN, NaN)`.
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    /// The multiplicative identity `(1, 0)`.
    pub const ONE: Self = Self::new(1.0, 0.0);

    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    pub fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// Returns `true` if either component is NaN.
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }

    /// Modulus `√(re² + im²)`.
    ///
    /// The square sum is evaluated directly, so components beyond roughly
    /// `1e154` overflow to `+∞` even when the modulus itself is representable.
    ///
    /// # Returns
    /// - `f64::NAN` if `self` is NaN.
    pub fn abs(&self) -> f64 {
        if self.is_nan() {
            return f64::NAN;
        }
        self.square_sum().sqrt()
    }

    /// Component-wise sum.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        Self::new(self.real + rhs.real, self.imaginary + rhs.imaginary)
    }

    /// Component-wise difference.
    pub fn subtract(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        Self::new(self.real - rhs.real, self.imaginary - rhs.imaginary)
    }

    /// Additive inverse `(−re, −im)`.
    pub fn negate(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Self::new(-self.real, -self.imaginary)
    }

    /// Complex conjugate `(re, −im)`.
    pub fn conjugate(self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Self::new(self.real, -self.imaginary)
    }

    /// Product using three real multiplications.
    ///
    /// For `(a + bi)(c + di)`:
    /// - `ac = a·c`, `bd = b·d`, `p = (a + b)(c + d)`
    /// - result `= (ac − bd) + (p − ac − bd)i`
    ///
    /// The operation order is fixed; results can differ in the last bit from
    /// the four-multiplication expansion `(ac − bd) + (ad + bc)i`.
    ///
    /// # Examples
    /// ```
    /// use u_mathutil::Complex;
    /// let z = Complex::new(1.0, 2.0).multiply(Complex::new(3.0, 4.0));
    /// assert_eq!(z, Complex::new(-5.0, 10.0));
    /// assert_eq!(Complex::I.multiply(Complex::I), Complex::new(-1.0, 0.0));
    /// ```
    pub fn multiply(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        let p = (self.real + self.imaginary) * (rhs.real + rhs.imaginary);
        let ac = self.real * rhs.real;
        let bd = self.imaginary * rhs.imaginary;
        Self::new(ac - bd, p - ac - bd)
    }

    /// Quotient by Smith's algorithm.
    ///
    /// Division by zero is not guarded: `(x, y) / (0, 0)` follows IEEE-754
    /// and yields infinities or NaN components.
    ///
    /// # Examples
    /// ```
    /// use u_mathutil::Complex;
    /// let z = Complex::new(-5.0, 10.0).divide(Complex::new(3.0, 4.0));
    /// assert_eq!(z, Complex::new(1.0, 2.0));
    /// ```
    pub fn divide(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        let (c, d) = (rhs.real, rhs.imaginary);
        if c.abs() < d.abs() {
            let q = c / d;
            let denom = c * q + d;
            Self::new(
                (self.real * q + self.imaginary) / denom,
                (self.imaginary * q - self.real) / denom,
            )
        } else {
            let q = d / c;
            let denom = d * q + c;
            Self::new(
                (self.imaginary * q + self.real) / denom,
                (self.imaginary - self.real * q) / denom,
            )
        }
    }

    fn square_sum(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }
}

// ============================================================================
// Equality
// ============================================================================

// Bit-exact: NaN equals NaN, +0.0 differs from -0.0.
impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.real.to_bits() == other.real.to_bits()
            && self.imaginary.to_bits() == other.imaginary.to_bits()
    }
}

impl Eq for Complex {}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.real.to_bits().hash(state);
        self.imaginary.to_bits().hash(state);
    }
}

// ============================================================================
// Conversions and formatting
// ============================================================================

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary.is_sign_negative() && !self.imaginary.is_nan() {
            write!(f, "{} - {}i", self.real, -self.imaginary)
        } else {
            write!(f, "{} + {}i", self.real, self.imaginary)
        }
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Complex {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite() -> impl Strategy<Value = f64> {
        -1e3_f64..1e3
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn multiply_close_to_naive(a in finite(), b in finite(), c in finite(), d in finite()) {
            let z = Complex::new(a, b).multiply(Complex::new(c, d));
            let scale = (a.abs() + b.abs()) * (c.abs() + d.abs()) + 1.0;
            prop_assert!((z.real() - (a * c - b * d)).abs() <= 1e-12 * scale);
            prop_assert!((z.imaginary() - (a * d + b * c)).abs() <= 1e-12 * scale);
        }

        #[test]
        fn divide_inverts_multiply(
            a in finite(), b in finite(), c in finite(), d in finite()
        ) {
            let x = Complex::new(a, b);
            let y = Complex::new(c, d);
            prop_assume!(x.abs() > 1e-3 && y.abs() > 1e-3);
            let back = x.multiply(y).divide(y);
            let err = back.subtract(x).abs();
            prop_assert!(err <= 1e-10 * (1.0 + x.abs()), "x={x}, y={y}, back={back}");
        }

        #[test]
        fn equality_is_reflexive(a in any::<f64>(), b in any::<f64>()) {
            let z = Complex::new(a, b);
            prop_assert_eq!(z, z);
        }

        #[test]
        fn nan_operand_gives_nan(a in finite(), b in finite()) {
            let x = Complex::new(a, b);
            let n = Complex::new(a, f64::NAN);
            prop_assert!(x.add(n).is_nan());
            prop_assert!(x.subtract(n).is_nan());
            prop_assert!(x.multiply(n).is_nan());
            prop_assert!(n.divide(x).is_nan());
        }

        #[test]
        fn conjugate_product_is_real(a in finite(), b in finite()) {
            let z = Complex::new(a, b);
            let p = z.multiply(z.conjugate());
            let scale = a * a + b * b + 1.0;
            prop_assert!(p.imaginary().abs() <= 1e-12 * scale);
            prop_assert!((p.real() - z.abs() * z.abs()).abs() <= 1e-12 * scale);
        }
    }
}
