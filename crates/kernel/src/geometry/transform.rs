use std::fmt;
use std::ops::Mul;

use nalgebra::Matrix3;

use super::numeric::{num, to_f64, Numeric};
use super::vector::Vec3;
use crate::error::CsgError;

/// A rotation as an exact 3x3 orthonormal matrix.
///
/// Columns are the local X, Y and Z axes expressed in the parent frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    matrix: Matrix3<Numeric>,
}

impl Orientation {
    /// Build from row-major entries, rejecting anything that is not exactly
    /// orthonormal.
    pub fn new(rows: [[Numeric; 3]; 3]) -> Result<Self, CsgError> {
        let matrix = Matrix3::from_fn(|r, c| rows[r][c].clone());
        if &matrix.transpose() * &matrix != Matrix3::identity() {
            return Err(CsgError::NotOrthonormal);
        }
        Ok(Self { matrix })
    }

    /// Build from the three local axes given in the parent frame.
    pub fn from_columns(x_axis: &Vec3, y_axis: &Vec3, z_axis: &Vec3) -> Result<Self, CsgError> {
        let cols = [x_axis, y_axis, z_axis];
        let component = |v: &Vec3, r: usize| match r {
            0 => v.x.clone(),
            1 => v.y.clone(),
            _ => v.z.clone(),
        };
        Self::new([
            [component(cols[0], 0), component(cols[1], 0), component(cols[2], 0)],
            [component(cols[0], 1), component(cols[1], 1), component(cols[2], 1)],
            [component(cols[0], 2), component(cols[1], 2), component(cols[2], 2)],
        ])
    }

    fn from_i64_rows(rows: [[i64; 3]; 3]) -> Self {
        Self {
            matrix: Matrix3::from_fn(|r, c| num(rows[r][c])),
        }
    }

    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Facing east (+X); same as identity.
    pub fn east() -> Self {
        Self::identity()
    }

    /// Facing west (-X): half turn about Z.
    #[rustfmt::skip]
    pub fn west() -> Self {
        Self::from_i64_rows([
            [-1,  0, 0],
            [ 0, -1, 0],
            [ 0,  0, 1],
        ])
    }

    /// Facing north (+Y): quarter turn counter-clockwise about Z.
    #[rustfmt::skip]
    pub fn north() -> Self {
        Self::from_i64_rows([
            [0, -1, 0],
            [1,  0, 0],
            [0,  0, 1],
        ])
    }

    /// Facing south (-Y): quarter turn clockwise about Z.
    #[rustfmt::skip]
    pub fn south() -> Self {
        Self::from_i64_rows([
            [ 0, 1, 0],
            [-1, 0, 0],
            [ 0, 0, 1],
        ])
    }

    /// Facing up (+Z): quarter turn about Y.
    #[rustfmt::skip]
    pub fn up() -> Self {
        Self::from_i64_rows([
            [ 0, 0, 1],
            [ 0, 1, 0],
            [-1, 0, 0],
        ])
    }

    /// Facing down (-Z): quarter turn about Y the other way.
    #[rustfmt::skip]
    pub fn down() -> Self {
        Self::from_i64_rows([
            [0, 0, -1],
            [0, 1,  0],
            [1, 0,  0],
        ])
    }

    pub fn matrix(&self) -> &Matrix3<Numeric> {
        &self.matrix
    }

    /// Local axis `i` (0 = X, 1 = Y, 2 = Z) in the parent frame.
    pub fn column(&self, i: usize) -> Vec3 {
        Vec3::new(
            self.matrix[(0, i)].clone(),
            self.matrix[(1, i)].clone(),
            self.matrix[(2, i)].clone(),
        )
    }

    /// Rotate a local vector into the parent frame.
    pub fn apply(&self, v: &Vec3) -> Vec3 {
        let row = |r: usize| {
            &self.matrix[(r, 0)] * &v.x + &self.matrix[(r, 1)] * &v.y + &self.matrix[(r, 2)] * &v.z
        };
        Vec3::new(row(0), row(1), row(2))
    }

    /// Rotate a parent-frame vector into the local frame (multiply by the transpose).
    pub fn apply_inverse(&self, v: &Vec3) -> Vec3 {
        Vec3::new(self.column(0).dot(v), self.column(1).dot(v), self.column(2).dot(v))
    }

    /// The inverse rotation; the transpose for an orthonormal matrix.
    pub fn transpose(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// `self * other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            matrix: &self.matrix * &other.matrix,
        }
    }

    pub fn to_f64_rows(&self) -> [[f64; 3]; 3] {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, entry) in row.iter_mut().enumerate() {
                *entry = to_f64(&self.matrix[(r, c)]);
            }
        }
        rows
    }
}

impl Mul for &Orientation {
    type Output = Orientation;
    fn mul(self, rhs: &Orientation) -> Orientation {
        self.compose(rhs)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..3 {
            if r > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "[{}, {}, {}]",
                self.matrix[(r, 0)],
                self.matrix[(r, 1)],
                self.matrix[(r, 2)]
            )?;
        }
        write!(f, "]")
    }
}

/// A rigid placement: local frame to parent frame is `R * p + position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    pub position: Vec3,
    pub orientation: Orientation,
}

impl Transform {
    pub fn new(position: Vec3, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    pub fn identity() -> Self {
        Self::new(Vec3::zero(), Orientation::identity())
    }

    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, Orientation::identity())
    }

    pub fn local_to_global(&self, local: &Vec3) -> Vec3 {
        &self.orientation.apply(local) + &self.position
    }

    pub fn global_to_local(&self, global: &Vec3) -> Vec3 {
        self.orientation.apply_inverse(&(global - &self.position))
    }

    pub fn invert(&self) -> Self {
        let orientation = self.orientation.transpose();
        let position = -orientation.apply(&self.position);
        Self::new(position, orientation)
    }

    /// `self * other`: the placement of `other`'s local frame seen from
    /// `self`'s parent frame.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.local_to_global(&other.position),
            self.orientation.compose(&other.orientation),
        )
    }

    /// Re-express this placement relative to `new_parent`.
    pub fn to_local_transform(&self, new_parent: &Self) -> Self {
        new_parent.invert().compose(self)
    }
}

impl Mul for &Transform {
    type Output = Transform;
    fn mul(self, rhs: &Transform) -> Transform {
        self.compose(rhs)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transform(position={}, orientation={})",
            self.position, self.orientation
        )
    }
}
