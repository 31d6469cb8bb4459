use std::fmt;

use crate::error::CsgError;
use crate::geometry::{Direction, Numeric, Transform, Vec3};
use crate::Precision;

use super::PointQuery;

/// All points `p` with `p · normal >= offset`.
///
/// The normal points into the solid, so the outward normal is its negation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfSpace {
    normal: Vec3,
    offset: Numeric,
}

impl HalfSpace {
    pub fn new(normal: Vec3, offset: Numeric) -> Result<Self, CsgError> {
        if normal.is_zero() {
            return Err(CsgError::ZeroVector {
                what: "half-space normal",
            });
        }
        Ok(Self { normal, offset })
    }

    pub fn normal(&self) -> &Vec3 {
        &self.normal
    }

    pub fn offset(&self) -> &Numeric {
        &self.offset
    }

    /// The same half-space carried rigidly by `transform`. The plane
    /// equation is re-derived exactly.
    pub(crate) fn transformed(&self, transform: &Transform) -> Self {
        // Rotation keeps the normal non-zero.
        let normal = transform.orientation.apply(&self.normal);
        let offset = &self.offset + normal.dot(&transform.position);
        Self { normal, offset }
    }

    /// Signed `p · normal - offset`; zero on the plane, positive inside.
    pub fn signed_offset(&self, point: &Vec3) -> Numeric {
        point.dot(&self.normal) - &self.offset
    }
}

impl PointQuery for HalfSpace {
    fn contains_point(&self, point: &Vec3) -> bool {
        point.dot(&self.normal) >= self.offset
    }

    fn is_point_on_boundary(&self, point: &Vec3) -> bool {
        point.dot(&self.normal) == self.offset
    }

    fn outward_normal_with(&self, _point: &Vec3, _precision: &Precision) -> Option<Direction> {
        Direction::new(-&self.normal).ok()
    }

    fn face_normals(&self, point: &Vec3) -> Vec<Direction> {
        if !self.is_point_on_boundary(point) {
            return Vec::new();
        }
        Direction::new(-&self.normal).into_iter().collect()
    }
}

impl fmt::Display for HalfSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HalfSpace(normal={}, offset={})", self.normal, self.offset)
    }
}
