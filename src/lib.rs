//! # u-mathutil
//!
//! Numerically careful scalar and complex primitives for the U-Engine ecosystem.
//!
//! ## Modules
//!
//! - [`complex`]: `f64` complex numbers with canonical-NaN propagation
//! - [`sign`](mod@sign): three-way `sign` and two-way `indicator` over floats and ints
//! - [`combinatorics`]: factorials and binomial coefficients in log space
//! - [`hyperbolic`]: `cosh` / `sinh` from the exponential
//!
//! ## Design Philosophy
//!
//! - **Overflow avoidance first**: Smith's algorithm for complex division,
//!   log-space summation for combinatorics
//! - **Special values propagate**: NaN and ±∞ flow through arithmetic;
//!   only domain and `i64` overflow errors are reported, via [`MathError`]
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod combinatorics;
pub mod complex;
pub mod error;
pub mod hyperbolic;
pub mod sign;

pub use complex::Complex;
pub use error::MathError;
pub use sign::{indicator, sign, Sign};
