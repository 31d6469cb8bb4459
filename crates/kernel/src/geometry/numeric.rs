//! Exact scalar arithmetic.
//!
//! Every coordinate, extent and threshold in the kernel is a [`Numeric`], an
//! arbitrary-precision rational. Comparisons are exact; there is no epsilon
//! anywhere in the classification path.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::Precision;

/// Exact rational scalar.
pub type Numeric = BigRational;

/// Integer literal as a [`Numeric`].
pub fn num(n: i64) -> Numeric {
    BigRational::from_integer(BigInt::from(n))
}

/// The fraction `n / d` as a [`Numeric`].
///
/// Panics if `d` is zero.
pub fn frac(n: i64, d: i64) -> Numeric {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Square root of `q`, if it is itself rational.
///
/// Returns `None` for negative input and for values whose root is irrational.
pub fn exact_sqrt(q: &Numeric) -> Option<Numeric> {
    if q.is_negative() {
        return None;
    }
    let n = q.numer();
    let d = q.denom();
    let rn = Roots::sqrt(n);
    let rd = Roots::sqrt(d);
    if &(&rn * &rn) == n && &(&rd * &rd) == d {
        Some(BigRational::new(rn, rd))
    } else {
        None
    }
}

/// Square root of `q`, exact when possible, otherwise rounded down to
/// `precision.sqrt_bits` fractional bits.
///
/// The result depends only on `q` and the precision, so two vectors with the
/// same squared length always get the same approximate length.
pub fn approx_sqrt(q: &Numeric, precision: &Precision) -> Numeric {
    if let Some(root) = exact_sqrt(q) {
        return root;
    }
    if !q.is_positive() {
        return Numeric::zero();
    }
    let bits = precision.sqrt_bits as usize;
    let scaled: BigInt = (q.numer().clone() << (2 * bits)) / q.denom();
    let root = Roots::sqrt(&scaled);
    BigRational::new(root, BigInt::from(1) << bits)
}

/// Compare `lhs` against `coeff * sqrt(radicand)` without leaving the rationals.
///
/// `radicand` must be non-negative.
pub fn cmp_scaled_sqrt(lhs: &Numeric, coeff: &Numeric, radicand: &Numeric) -> Ordering {
    let sign_rhs = if radicand.is_zero() { 0 } else { signum(coeff) };
    let sign_lhs = signum(lhs);
    if sign_lhs != sign_rhs {
        return sign_lhs.cmp(&sign_rhs);
    }
    if sign_lhs == 0 {
        return Ordering::Equal;
    }
    let lhs_sq = lhs * lhs;
    let rhs_sq = coeff * coeff * radicand;
    if sign_lhs > 0 {
        lhs_sq.cmp(&rhs_sq)
    } else {
        rhs_sq.cmp(&lhs_sq)
    }
}

fn signum(q: &Numeric) -> i8 {
    if q.is_positive() {
        1
    } else if q.is_negative() {
        -1
    } else {
        0
    }
}

/// Lossy conversion for handing values to float-based CAD kernels.
pub fn to_f64(q: &Numeric) -> f64 {
    q.to_f64().unwrap_or(f64::NAN)
}
