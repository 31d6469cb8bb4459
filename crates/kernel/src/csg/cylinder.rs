use std::cmp::Ordering;
use std::fmt;

use num_traits::{Signed, Zero};

use crate::error::{check_bounds, CsgError};
use crate::geometry::numeric::cmp_scaled_sqrt;
use crate::geometry::{Direction, Numeric, Transform, Vec3};
use crate::Precision;

use super::{fmt_bound, PointQuery};

/// A right circular cylinder around `axis` through `position`.
///
/// `start` and `end` are distances along the normalized axis measured from
/// `position`. The axis keeps whatever length it was given; every test scales
/// the bound instead, so an axis of irrational length is still handled
/// exactly. Two cylinders whose axes differ only in length are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cylinder {
    axis: Direction,
    radius: Numeric,
    position: Vec3,
    start: Option<Numeric>,
    end: Option<Numeric>,
}

/// Where a point sits relative to the cylinder, in exact terms.
struct AxialFrame {
    /// `d · axis`, the axial coordinate scaled by `|axis|`.
    scaled_axial: Numeric,
    /// Squared distance from the axis line.
    radial_sq: Numeric,
    /// `d` with its axial component removed.
    radial: Vec3,
}

impl Cylinder {
    pub fn new(
        axis: Vec3,
        radius: Numeric,
        position: Vec3,
        start: Option<Numeric>,
        end: Option<Numeric>,
    ) -> Result<Self, CsgError> {
        let axis = Direction::new(axis).map_err(|_| CsgError::ZeroVector {
            what: "cylinder axis",
        })?;
        if radius.is_negative() {
            return Err(CsgError::NegativeDimension {
                what: "cylinder radius",
                value: radius,
            });
        }
        check_bounds(&start, &end)?;
        Ok(Self {
            axis,
            radius,
            position,
            start,
            end,
        })
    }

    /// The axis vector as given, not normalized.
    pub fn axis(&self) -> &Vec3 {
        self.axis.vector()
    }

    pub fn axis_direction(&self) -> &Direction {
        &self.axis
    }

    pub fn radius(&self) -> &Numeric {
        &self.radius
    }

    pub fn position(&self) -> &Vec3 {
        &self.position
    }

    pub fn start(&self) -> Option<&Numeric> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Numeric> {
        self.end.as_ref()
    }

    /// The same cylinder carried rigidly by `transform`.
    pub(crate) fn transformed(&self, transform: &Transform) -> Self {
        Self {
            axis: self.axis.rotated(&transform.orientation),
            radius: self.radius.clone(),
            position: transform.local_to_global(&self.position),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    fn frame(&self, point: &Vec3) -> AxialFrame {
        let d = point - &self.position;
        let axis = self.axis.vector();
        let s = d.dot(axis);
        let radial = &d - &self.axis.project(&d);
        let radial_sq = d.length_squared() - &s * &s / axis.length_squared();
        AxialFrame {
            scaled_axial: s,
            radial_sq,
            radial,
        }
    }

    /// Compare the axial coordinate of the point against a bound.
    fn cmp_axial(&self, frame: &AxialFrame, bound: &Numeric) -> Ordering {
        cmp_scaled_sqrt(&frame.scaled_axial, bound, &self.axis.vector().length_squared())
    }

    fn within_bounds(&self, frame: &AxialFrame) -> bool {
        self.start
            .as_ref()
            .is_none_or(|s| self.cmp_axial(frame, s) != Ordering::Less)
            && self
                .end
                .as_ref()
                .is_none_or(|e| self.cmp_axial(frame, e) != Ordering::Greater)
    }

    fn on_start_cap(&self, frame: &AxialFrame) -> bool {
        self.start
            .as_ref()
            .is_some_and(|s| self.cmp_axial(frame, s) == Ordering::Equal)
    }

    fn on_end_cap(&self, frame: &AxialFrame) -> bool {
        self.end
            .as_ref()
            .is_some_and(|e| self.cmp_axial(frame, e) == Ordering::Equal)
    }

    fn contains_frame(&self, frame: &AxialFrame) -> bool {
        self.within_bounds(frame) && frame.radial_sq <= &self.radius * &self.radius
    }

    fn on_curved_surface(&self, frame: &AxialFrame) -> bool {
        frame.radial_sq == &self.radius * &self.radius
    }

    /// Normals of the curved surface and caps through the point, in that
    /// order. A zero-radius cylinder has no curved-surface normal.
    fn faces(&self, frame: &AxialFrame) -> Vec<Direction> {
        let mut faces = Vec::new();
        if !self.radius.is_zero() && self.on_curved_surface(frame) {
            faces.extend(Direction::new(frame.radial.clone()).ok());
        }
        if self.on_start_cap(frame) {
            faces.push(-&self.axis);
        }
        if self.on_end_cap(frame) {
            faces.push(self.axis.clone());
        }
        faces
    }
}

impl PointQuery for Cylinder {
    fn contains_point(&self, point: &Vec3) -> bool {
        self.contains_frame(&self.frame(point))
    }

    fn is_point_on_boundary(&self, point: &Vec3) -> bool {
        let frame = self.frame(point);
        self.contains_frame(&frame)
            && (self.on_curved_surface(&frame)
                || self.on_start_cap(&frame)
                || self.on_end_cap(&frame))
    }

    fn outward_normal_with(&self, point: &Vec3, _precision: &Precision) -> Option<Direction> {
        self.faces(&self.frame(point)).into_iter().next()
    }

    fn face_normals(&self, point: &Vec3) -> Vec<Direction> {
        let frame = self.frame(point);
        if !self.contains_frame(&frame) {
            return Vec::new();
        }
        self.faces(&frame)
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cylinder(axis={}, radius={}, position={}, start={}, end={})",
            self.axis.vector(),
            self.radius,
            self.position,
            fmt_bound(&self.start),
            fmt_bound(&self.end)
        )
    }
}
