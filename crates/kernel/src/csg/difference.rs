use std::fmt;

use tracing::{debug, trace};

use crate::geometry::{Direction, Vec3};
use crate::Precision;

use super::{CsgNode, PointClassification, PointQuery};

/// `base` minus the union of `subtract`.
///
/// Points on a subtracted solid's surface stay in the result (the cut face
/// belongs to the remaining material) unless that surface coincides with the
/// base's own surface facing the same way, in which case the material there
/// was removed entirely.
///
/// The coincidence test compares a single normal per solid, so it is not
/// representative on edges, corners or curved surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Difference {
    base: Box<CsgNode>,
    subtract: Vec<CsgNode>,
}

impl Difference {
    pub fn new(base: CsgNode, subtract: Vec<CsgNode>) -> Self {
        Self {
            base: Box::new(base),
            subtract,
        }
    }

    pub fn base(&self) -> &CsgNode {
        &self.base
    }

    pub fn subtract(&self) -> &[CsgNode] {
        &self.subtract
    }

    /// True if the subtracted solid's surface through `point` coincides with
    /// the base's surface facing the same way.
    fn removes_coplanar_face(&self, index: usize, sub: &CsgNode, point: &Vec3) -> bool {
        match (self.base.get_outward_normal(point), sub.get_outward_normal(point)) {
            (Some(base_normal), Some(sub_normal)) => {
                let same = base_normal.is_codirectional(&sub_normal);
                trace!(subtract = index, same, "compared coincident face normals");
                same
            }
            _ => {
                debug!(subtract = index, %point, "normal undeterminable, excluding point");
                true
            }
        }
    }
}

impl PointQuery for Difference {
    fn contains_point(&self, point: &Vec3) -> bool {
        if !self.base.contains_point(point) {
            return false;
        }
        let on_base_boundary = self.base.is_point_on_boundary(point);
        for (i, sub) in self.subtract.iter().enumerate() {
            match sub.classify(point) {
                PointClassification::Outside => {}
                PointClassification::Inside => {
                    trace!(subtract = i, "point removed by subtracted interior");
                    return false;
                }
                PointClassification::OnBoundary => {
                    if on_base_boundary && self.removes_coplanar_face(i, sub, point) {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn is_point_on_boundary(&self, point: &Vec3) -> bool {
        if !self.base.contains_point(point) {
            return false;
        }
        let mut on_cut = false;
        for sub in &self.subtract {
            match sub.classify(point) {
                PointClassification::Inside => return false,
                PointClassification::OnBoundary => on_cut = true,
                PointClassification::Outside => {}
            }
        }
        on_cut || self.base.is_point_on_boundary(point)
    }

    fn outward_normal_with(&self, point: &Vec3, precision: &Precision) -> Option<Direction> {
        if self.base.is_point_on_boundary(point) {
            return self.base.outward_normal_with(point, precision);
        }
        let normals = self
            .subtract
            .iter()
            .filter(|s| s.is_point_on_boundary(point))
            .filter_map(|s| s.outward_normal_with(point, precision))
            .map(|n| -n);
        Direction::average(normals, precision)
    }

    /// The base's faces through the point followed by the reversed faces of
    /// every cut whose surface passes through it.
    fn face_normals(&self, point: &Vec3) -> Vec<Direction> {
        if !self.contains_point(point) {
            return Vec::new();
        }
        let mut faces = self.base.face_normals(point);
        for sub in &self.subtract {
            faces.extend(sub.face_normals(point).into_iter().map(|n| -n));
        }
        faces
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference(base={}, subtract={} objects)",
            self.base,
            self.subtract.len()
        )
    }
}
