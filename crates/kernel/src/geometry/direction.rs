//! Exact unit directions.
//!
//! A [`Direction`] keeps any non-zero representative vector and stands for
//! its normalization. Two directions are equal exactly when their unit
//! vectors have a dot product of one, which is decided with cross and dot
//! products alone, so normals of irrational length (diagonal polygon edges,
//! tilted cylinder axes) still compare without rounding.

use std::fmt;
use std::ops::Neg;

use num_traits::{One, Zero};

use super::numeric::{approx_sqrt, exact_sqrt, to_f64, Numeric};
use super::transform::Orientation;
use super::vector::Vec3;
use crate::error::CsgError;
use crate::Precision;

#[derive(Debug, Clone)]
pub struct Direction {
    v: Vec3,
}

impl Direction {
    /// Wrap a non-zero vector. This is the kernel's safe norm: the zero
    /// vector is rejected instead of producing a meaningless unit vector.
    pub fn new(v: Vec3) -> Result<Self, CsgError> {
        if v.is_zero() {
            return Err(CsgError::ZeroVector { what: "direction" });
        }
        Ok(Self { v })
    }

    pub fn x() -> Self {
        Self { v: Vec3::unit_x() }
    }

    pub fn y() -> Self {
        Self { v: Vec3::unit_y() }
    }

    pub fn z() -> Self {
        Self { v: Vec3::unit_z() }
    }

    pub fn from_i64(x: i64, y: i64, z: i64) -> Result<Self, CsgError> {
        Self::new(Vec3::from_i64(x, y, z))
    }

    /// The stored (not necessarily unit) representative.
    pub fn vector(&self) -> &Vec3 {
        &self.v
    }

    /// True when the unit vectors of `self` and `other` have dot product one.
    pub fn is_codirectional(&self, other: &Self) -> bool {
        self.v.cross(&other.v).is_zero() && self.v.dot(&other.v) > Numeric::zero()
    }

    /// True when the unit vectors of `self` and `other` have dot product minus one.
    pub fn is_opposite(&self, other: &Self) -> bool {
        self.v.cross(&other.v).is_zero() && self.v.dot(&other.v) < Numeric::zero()
    }

    /// The unit vector, if its coordinates are rational.
    pub fn unit(&self) -> Option<Vec3> {
        let len = exact_sqrt(&self.v.length_squared())?;
        Some(&self.v * &(Numeric::one() / len))
    }

    /// The unit vector, exact when rational, otherwise with its length
    /// rounded to `precision`.
    pub fn unit_approx(&self, precision: &Precision) -> Vec3 {
        let len = approx_sqrt(&self.v.length_squared(), precision);
        if len.is_zero() {
            return self.v.clone();
        }
        &self.v * &(Numeric::one() / len)
    }

    /// Component of `v` along this direction. Exact even when the unit
    /// vector is irrational.
    pub fn project(&self, v: &Vec3) -> Vec3 {
        &self.v * &(v.dot(&self.v) / self.v.length_squared())
    }

    /// Rotate by an orientation matrix.
    pub fn rotated(&self, orientation: &Orientation) -> Self {
        // Orthonormal matrices never send a non-zero vector to zero.
        Self {
            v: orientation.apply(&self.v),
        }
    }

    /// Normalized direction of the sum of the unit vectors in `dirs`.
    ///
    /// Returns `None` for an empty input or when the unit vectors cancel.
    /// A single direction, or a set of codirectional ones, is returned as is
    /// without any rounding.
    pub fn average<I>(dirs: I, precision: &Precision) -> Option<Self>
    where
        I: IntoIterator<Item = Direction>,
    {
        let dirs: Vec<Direction> = dirs.into_iter().collect();
        let first = dirs.first()?;
        if dirs.iter().all(|d| d.is_codirectional(first)) {
            return Some(first.clone());
        }
        let sum = dirs
            .iter()
            .fold(Vec3::zero(), |acc, d| &acc + &d.unit_approx(precision));
        Self::new(sum).ok()
    }

    /// Normalized float triple for rendering back-ends.
    pub fn to_f64(&self) -> [f64; 3] {
        let [x, y, z] = self.v.to_f64_array();
        let len = (x * x + y * y + z * z).sqrt();
        [x / len, y / len, z / len]
    }
}

impl PartialEq for Direction {
    fn eq(&self, other: &Self) -> bool {
        self.is_codirectional(other)
    }
}

impl Eq for Direction {}

impl Neg for &Direction {
    type Output = Direction;
    fn neg(self) -> Direction {
        Direction { v: -&self.v }
    }
}

impl Neg for Direction {
    type Output = Direction;
    fn neg(self) -> Direction {
        Direction { v: -self.v }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit() {
            Some(u) => write!(f, "{}", u),
            None => write!(f, "dir{}", self.v),
        }
    }
}
