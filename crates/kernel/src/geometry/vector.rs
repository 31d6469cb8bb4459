use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use super::numeric::{num, to_f64, Numeric};

/// A vector (or point) in 3D space with exact rational coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vec3 {
    pub x: Numeric,
    pub y: Numeric,
    pub z: Numeric,
}

impl Vec3 {
    pub fn new(x: Numeric, y: Numeric, z: Numeric) -> Self {
        Self { x, y, z }
    }

    pub fn from_i64(x: i64, y: i64, z: i64) -> Self {
        Self::new(num(x), num(y), num(z))
    }

    pub fn zero() -> Self {
        Self::from_i64(0, 0, 0)
    }

    pub fn unit_x() -> Self {
        Self::from_i64(1, 0, 0)
    }

    pub fn unit_y() -> Self {
        Self::from_i64(0, 1, 0)
    }

    pub fn unit_z() -> Self {
        Self::from_i64(0, 0, 1)
    }

    pub fn dot(&self, other: &Self) -> Numeric {
        &self.x * &other.x + &self.y * &other.y + &self.z * &other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: &self.y * &other.z - &self.z * &other.y,
            y: &self.z * &other.x - &self.x * &other.z,
            z: &self.x * &other.y - &self.y * &other.x,
        }
    }

    pub fn length_squared(&self) -> Numeric {
        self.dot(self)
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    pub fn to_array(&self) -> [Numeric; 3] {
        [self.x.clone(), self.y.clone(), self.z.clone()]
    }

    pub fn to_f64_array(&self) -> [f64; 3] {
        [to_f64(&self.x), to_f64(&self.y), to_f64(&self.z)]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for &Vec3 {
    type Output = Vec3;
    fn add(self, rhs: &Vec3) -> Vec3 {
        Vec3::new(&self.x + &rhs.x, &self.y + &rhs.y, &self.z + &rhs.z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        &self + &rhs
    }
}

impl Sub for &Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: &Vec3) -> Vec3 {
        Vec3::new(&self.x - &rhs.x, &self.y - &rhs.y, &self.z - &rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        &self - &rhs
    }
}

impl Mul<&Numeric> for &Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: &Numeric) -> Vec3 {
        Vec3::new(&self.x * rhs, &self.y * rhs, &self.z * rhs)
    }
}

impl Neg for &Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-&self.x, -&self.y, -&self.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        -&self
    }
}

/// A vector (or point) in the plane, used for cross-sections and profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub x: Numeric,
    pub y: Numeric,
}

impl Vec2 {
    pub fn new(x: Numeric, y: Numeric) -> Self {
        Self { x, y }
    }

    pub fn from_i64(x: i64, y: i64) -> Self {
        Self::new(num(x), num(y))
    }

    pub fn dot(&self, other: &Self) -> Numeric {
        &self.x * &other.x + &self.y * &other.y
    }

    /// Z component of the 3D cross product of `self` and `other`.
    pub fn cross(&self, other: &Self) -> Numeric {
        &self.x * &other.y - &self.y * &other.x
    }

    pub fn length_squared(&self) -> Numeric {
        self.dot(self)
    }

    /// Left perpendicular, `(-y, x)`.
    pub fn perp(&self) -> Self {
        Self::new(-&self.y, self.x.clone())
    }

    /// Lift into 3D at height `z`.
    pub fn extend(&self, z: Numeric) -> Vec3 {
        Vec3::new(self.x.clone(), self.y.clone(), z)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for &Vec2 {
    type Output = Vec2;
    fn add(self, rhs: &Vec2) -> Vec2 {
        Vec2::new(&self.x + &rhs.x, &self.y + &rhs.y)
    }
}

impl Sub for &Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: &Vec2) -> Vec2 {
        Vec2::new(&self.x - &rhs.x, &self.y - &rhs.y)
    }
}

impl Mul<&Numeric> for &Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: &Numeric) -> Vec2 {
        Vec2::new(&self.x * rhs, &self.y * rhs)
    }
}

impl Neg for &Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-&self.x, -&self.y)
    }
}
