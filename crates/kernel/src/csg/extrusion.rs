//! Extruded convex polygons.
//!
//! The polygon lives in the local XY plane and is stored counter-clockwise:
//! [`ConvexPolygonExtrusion::new`] reverses clockwise input. With that
//! winding, a point is inside when it lies on the left of (or on) every edge.

use std::fmt;

use num_traits::{One, Signed, Zero};
use tracing::trace;

use crate::error::{Bound, CsgError};
use crate::geometry::{num, Direction, Numeric, Transform, Vec2, Vec3};
use crate::Precision;

use super::{fmt_bound, PointQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexPolygonExtrusion {
    points: Vec<Vec2>,
    transform: Transform,
    start: Option<Numeric>,
    end: Option<Numeric>,
}

/// Twice the signed area of a polygon; positive for counter-clockwise.
fn signed_area2(points: &[Vec2]) -> Numeric {
    let n = points.len();
    (0..n).fold(Numeric::zero(), |acc, i| {
        acc + points[i].cross(&points[(i + 1) % n])
    })
}

impl ConvexPolygonExtrusion {
    /// Build without validation so [`is_valid`](Self::is_valid) can report
    /// on bad input. Clockwise polygons are reversed.
    pub fn new(
        points: Vec<Vec2>,
        transform: Transform,
        start: Option<Numeric>,
        end: Option<Numeric>,
    ) -> Self {
        let mut points = points;
        if signed_area2(&points).is_negative() {
            trace!(count = points.len(), "reversing clockwise polygon");
            points.reverse();
        }
        Self {
            points,
            transform,
            start,
            end,
        }
    }

    /// Build and validate in one step.
    pub fn try_new(
        points: Vec<Vec2>,
        transform: Transform,
        start: Option<Numeric>,
        end: Option<Numeric>,
    ) -> Result<Self, CsgError> {
        let extrusion = Self::new(points, transform, start, end);
        extrusion.validate()?;
        Ok(extrusion)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
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

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check point count, axial bounds and convexity.
    pub fn validate(&self) -> Result<(), CsgError> {
        let n = self.points.len();
        if n < 3 {
            return Err(CsgError::InvalidPolygon {
                reason: format!("need at least 3 points, got {n}"),
            });
        }
        if let (Some(start), Some(end)) = (&self.start, &self.end) {
            if start > end {
                return Err(CsgError::InvertedBounds {
                    start: start.clone(),
                    end: end.clone(),
                });
            }
            if start == end {
                return Err(CsgError::InvalidPolygon {
                    reason: "zero-length extrusion".to_string(),
                });
            }
        }

        let mut sign: Option<bool> = None;
        for i in 0..n {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            let c = &self.points[(i + 2) % n];
            let cross = (b - a).cross(&(c - b));
            if cross.is_zero() {
                continue;
            }
            let positive = cross.is_positive();
            match sign {
                None => sign = Some(positive),
                Some(s) if s != positive => {
                    return Err(CsgError::InvalidPolygon {
                        reason: format!("not convex at vertex {}", (i + 1) % n),
                    });
                }
                Some(_) => {}
            }
        }
        if sign.is_none() {
            return Err(CsgError::InvalidPolygon {
                reason: "all points are collinear".to_string(),
            });
        }
        Ok(())
    }

    /// Global position of the start cap's origin.
    pub fn bottom_position(&self) -> Result<Vec3, CsgError> {
        let start = self
            .start
            .as_ref()
            .ok_or(CsgError::Unbounded { bound: Bound::Start })?;
        Ok(self.transform.local_to_global(&Vec2::from_i64(0, 0).extend(start.clone())))
    }

    /// Global position of the end cap's origin.
    pub fn top_position(&self) -> Result<Vec3, CsgError> {
        let end = self
            .end
            .as_ref()
            .ok_or(CsgError::Unbounded { bound: Bound::End })?;
        Ok(self.transform.local_to_global(&Vec2::from_i64(0, 0).extend(end.clone())))
    }

    /// Vertex average, used to orient edge normals.
    pub fn centroid(&self) -> Vec2 {
        if self.points.is_empty() {
            return Vec2::from_i64(0, 0);
        }
        let sum = self
            .points
            .iter()
            .fold(Vec2::from_i64(0, 0), |acc, p| &acc + p);
        let inv = Numeric::one() / num(self.points.len() as i64);
        &sum * &inv
    }

    fn edges(&self) -> impl Iterator<Item = (&Vec2, &Vec2)> {
        let n = self.points.len();
        (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
    }

    fn within_bounds(&self, z: &Numeric) -> bool {
        self.start.as_ref().is_none_or(|s| z >= s) && self.end.as_ref().is_none_or(|e| z <= e)
    }

    fn contains_local(&self, local: &Vec3) -> bool {
        if self.points.is_empty() || !self.within_bounds(&local.z) {
            return false;
        }
        let q = Vec2::new(local.x.clone(), local.y.clone());
        self.edges()
            .all(|(a, b)| !(b - a).cross(&(&q - a)).is_negative())
    }

    /// The closest point on a non-degenerate edge, if `q` lies on it.
    fn edge_hit(a: &Vec2, b: &Vec2, q: &Vec2) -> Option<Vec2> {
        let edge = b - a;
        let len2 = edge.length_squared();
        if len2.is_zero() {
            return None;
        }
        let t = (q - a).dot(&edge) / &len2;
        if t.is_negative() || t > Numeric::one() {
            return None;
        }
        let closest = a + &(&edge * &t);
        (q - &closest).length_squared().is_zero().then_some(closest)
    }

    /// Outward normal of the side wall over edge `a -> b`, pointing away
    /// from the centroid.
    fn side_normal(&self, a: &Vec2, b: &Vec2, closest: &Vec2, centroid: &Vec2) -> Option<Direction> {
        let mut normal = (b - a).perp();
        if normal.dot(&(closest - centroid)).is_negative() {
            normal = -&normal;
        }
        Direction::new(self.transform.orientation.apply(&normal.extend(Numeric::zero()))).ok()
    }

    /// Global normals of every face through a local point: end cap, start
    /// cap, then each side wall in edge order.
    fn faces_local(&self, local: &Vec3) -> Vec<Direction> {
        let orientation = &self.transform.orientation;
        let mut faces = Vec::new();
        if self.end.as_ref() == Some(&local.z) {
            faces.push(Direction::z().rotated(orientation));
        }
        if self.start.as_ref() == Some(&local.z) {
            faces.push((-Direction::z()).rotated(orientation));
        }
        let q = Vec2::new(local.x.clone(), local.y.clone());
        let centroid = self.centroid();
        faces.extend(self.edges().filter_map(|(a, b)| {
            let closest = Self::edge_hit(a, b, &q)?;
            self.side_normal(a, b, &closest, &centroid)
        }));
        faces
    }

    /// The same extrusion carried rigidly by `transform`.
    pub(crate) fn transformed(&self, transform: &Transform) -> Self {
        Self {
            points: self.points.clone(),
            transform: transform.compose(&self.transform),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }

    fn on_side(&self, local: &Vec3) -> bool {
        let q = Vec2::new(local.x.clone(), local.y.clone());
        self.edges().any(|(a, b)| Self::edge_hit(a, b, &q).is_some())
    }
}

impl PointQuery for ConvexPolygonExtrusion {
    fn contains_point(&self, point: &Vec3) -> bool {
        self.contains_local(&self.transform.global_to_local(point))
    }

    fn is_point_on_boundary(&self, point: &Vec3) -> bool {
        let local = self.transform.global_to_local(point);
        if !self.contains_local(&local) {
            return false;
        }
        self.start.as_ref() == Some(&local.z)
            || self.end.as_ref() == Some(&local.z)
            || self.on_side(&local)
    }

    fn outward_normal_with(&self, point: &Vec3, _precision: &Precision) -> Option<Direction> {
        let local = self.transform.global_to_local(point);
        self.faces_local(&local).into_iter().next()
    }

    fn face_normals(&self, point: &Vec3) -> Vec<Direction> {
        let local = self.transform.global_to_local(point);
        if !self.contains_local(&local) {
            return Vec::new();
        }
        self.faces_local(&local)
    }
}

impl fmt::Display for ConvexPolygonExtrusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConvexPolygonExtrusion({} points, transform={}, start={}, end={})",
            self.points.len(),
            self.transform,
            fmt_bound(&self.start),
            fmt_bound(&self.end)
        )
    }
}
