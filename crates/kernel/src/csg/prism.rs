use std::fmt;

use num_traits::{Signed, Zero};

use crate::error::{check_bounds, Bound, CsgError};
use crate::geometry::{frac, Direction, Numeric, Transform, Vec2, Vec3};
use crate::Precision;

use super::{fmt_bound, PointQuery};

/// A box with a `size.x` by `size.y` cross-section centred on the local Z
/// axis, extruded along local Z from `start` to `end`.
///
/// Either bound may be absent, in which case the prism runs to infinity in
/// that direction and has no cap there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangularPrism {
    size: Vec2,
    transform: Transform,
    start: Option<Numeric>,
    end: Option<Numeric>,
}

impl RectangularPrism {
    pub fn new(
        size: Vec2,
        transform: Transform,
        start: Option<Numeric>,
        end: Option<Numeric>,
    ) -> Result<Self, CsgError> {
        if size.x.is_negative() {
            return Err(CsgError::NegativeDimension {
                what: "prism width",
                value: size.x,
            });
        }
        if size.y.is_negative() {
            return Err(CsgError::NegativeDimension {
                what: "prism height",
                value: size.y,
            });
        }
        check_bounds(&start, &end)?;
        Ok(Self {
            size,
            transform,
            start,
            end,
        })
    }

    pub fn size(&self) -> &Vec2 {
        &self.size
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn start(&self) -> Option<&Numeric> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Numeric> {
        self.end.as_ref()
    }

    /// Global centre of the start cap.
    pub fn bottom_position(&self) -> Result<Vec3, CsgError> {
        let start = self
            .start
            .as_ref()
            .ok_or(CsgError::Unbounded { bound: Bound::Start })?;
        Ok(self.cap_centre(start))
    }

    /// Global centre of the end cap.
    pub fn top_position(&self) -> Result<Vec3, CsgError> {
        let end = self
            .end
            .as_ref()
            .ok_or(CsgError::Unbounded { bound: Bound::End })?;
        Ok(self.cap_centre(end))
    }

    fn cap_centre(&self, z: &Numeric) -> Vec3 {
        self.transform
            .local_to_global(&Vec3::new(Numeric::zero(), Numeric::zero(), z.clone()))
    }

    fn half_extents(&self) -> (Numeric, Numeric) {
        let half = frac(1, 2);
        (&self.size.x * &half, &self.size.y * &half)
    }

    fn within_bounds(&self, z: &Numeric) -> bool {
        self.start.as_ref().is_none_or(|s| z >= s) && self.end.as_ref().is_none_or(|e| z <= e)
    }

    fn contains_local(&self, local: &Vec3) -> bool {
        let (hw, hh) = self.half_extents();
        local.x.abs() <= hw && local.y.abs() <= hh && self.within_bounds(&local.z)
    }

    /// Local outward normals of every face the point lies on, in priority
    /// order: start cap, end cap, width faces, height faces.
    fn face_normals_local(&self, local: &Vec3) -> Vec<Vec3> {
        let (hw, hh) = self.half_extents();
        let mut faces = Vec::new();
        if self.start.as_ref() == Some(&local.z) {
            faces.push(-Vec3::unit_z());
        }
        if self.end.as_ref() == Some(&local.z) {
            faces.push(Vec3::unit_z());
        }
        if local.x == hw {
            faces.push(Vec3::unit_x());
        }
        if local.x == -&hw {
            faces.push(-Vec3::unit_x());
        }
        if local.y == hh {
            faces.push(Vec3::unit_y());
        }
        if local.y == -&hh {
            faces.push(-Vec3::unit_y());
        }
        faces
    }

    /// The same prism carried rigidly by `transform`.
    pub(crate) fn transformed(&self, transform: &Transform) -> Self {
        Self {
            size: self.size.clone(),
            transform: transform.compose(&self.transform),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl PointQuery for RectangularPrism {
    fn contains_point(&self, point: &Vec3) -> bool {
        self.contains_local(&self.transform.global_to_local(point))
    }

    fn is_point_on_boundary(&self, point: &Vec3) -> bool {
        let local = self.transform.global_to_local(point);
        self.contains_local(&local) && !self.face_normals_local(&local).is_empty()
    }

    fn outward_normal_with(&self, point: &Vec3, _precision: &Precision) -> Option<Direction> {
        let local = self.transform.global_to_local(point);
        let normal = self.face_normals_local(&local).into_iter().next()?;
        Direction::new(self.transform.orientation.apply(&normal)).ok()
    }

    fn face_normals(&self, point: &Vec3) -> Vec<Direction> {
        let local = self.transform.global_to_local(point);
        if !self.contains_local(&local) {
            return Vec::new();
        }
        self.face_normals_local(&local)
            .iter()
            .filter_map(|n| Direction::new(self.transform.orientation.apply(n)).ok())
            .collect()
    }
}

impl fmt::Display for RectangularPrism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RectangularPrism(size={}, transform={}, start={}, end={})",
            self.size,
            self.transform,
            fmt_bound(&self.start),
            fmt_bound(&self.end)
        )
    }
}
