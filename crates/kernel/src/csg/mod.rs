//! CSG node types and the three point queries.
//!
//! Every solid answers:
//! - `contains_point`: inside or on the boundary,
//! - `is_point_on_boundary`: contained and on the surface,
//! - `get_outward_normal`: unit normal at a boundary point, or `None` when it
//!   cannot be determined.
//!
//! `get_outward_normal` is only meaningful for boundary points. Off the
//! boundary the result is unspecified: leaves return `None` when the point
//! lies on none of their faces, combinators return whatever their children
//! report. It never panics.

pub mod classify;
pub mod cylinder;
pub mod difference;
pub mod extrusion;
pub mod halfspace;
pub mod prism;
pub mod profile;
pub mod reframe;
pub mod union;

use std::fmt;

use crate::geometry::{Direction, Vec3};
use crate::{default_precision, Precision};

pub use classify::PointClassification;
pub use cylinder::Cylinder;
pub use difference::Difference;
pub use extrusion::ConvexPolygonExtrusion;
pub use halfspace::HalfSpace;
pub use prism::RectangularPrism;
pub use union::SolidUnion;

/// Point classification queries shared by every CSG node.
pub trait PointQuery {
    /// True if the point is inside the solid or on its boundary.
    fn contains_point(&self, point: &Vec3) -> bool;

    /// True if the point is contained and lies on the solid's surface.
    fn is_point_on_boundary(&self, point: &Vec3) -> bool;

    /// Outward normal at a boundary point, averaging with `precision` where
    /// several normals meet.
    fn outward_normal_with(&self, point: &Vec3, precision: &Precision) -> Option<Direction>;

    /// Outward normals of every face passing through a contained point,
    /// not only the one `get_outward_normal` picks. Empty when the point is
    /// outside, strictly inside, or on a face with no determinable normal.
    fn face_normals(&self, point: &Vec3) -> Vec<Direction>;

    /// Outward normal at a boundary point.
    fn get_outward_normal(&self, point: &Vec3) -> Option<Direction> {
        self.outward_normal_with(point, &default_precision())
    }

    /// Inside, outside, or on the boundary.
    fn classify(&self, point: &Vec3) -> PointClassification {
        if !self.contains_point(point) {
            PointClassification::Outside
        } else if self.is_point_on_boundary(point) {
            PointClassification::OnBoundary
        } else {
            PointClassification::Inside
        }
    }
}

/// A CSG tree. Each node owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsgNode {
    HalfSpace(HalfSpace),
    RectangularPrism(RectangularPrism),
    Cylinder(Cylinder),
    ConvexPolygonExtrusion(ConvexPolygonExtrusion),
    SolidUnion(SolidUnion),
    Difference(Difference),
}

impl CsgNode {
    /// Direct children in evaluation order. For a difference the base comes
    /// first, followed by the subtracted solids.
    pub fn children(&self) -> Vec<&CsgNode> {
        match self {
            CsgNode::SolidUnion(u) => u.children().iter().collect(),
            CsgNode::Difference(d) => std::iter::once(d.base())
                .chain(d.subtract().iter())
                .collect(),
            CsgNode::HalfSpace(_)
            | CsgNode::RectangularPrism(_)
            | CsgNode::Cylinder(_)
            | CsgNode::ConvexPolygonExtrusion(_) => Vec::new(),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(CsgNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order traversal.
    pub fn walk<F: FnMut(&CsgNode)>(&self, f: &mut F) {
        f(self);
        for child in self.children() {
            child.walk(f);
        }
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, CsgNode::SolidUnion(_) | CsgNode::Difference(_))
    }

    fn as_query(&self) -> &dyn PointQuery {
        match self {
            CsgNode::HalfSpace(n) => n,
            CsgNode::RectangularPrism(n) => n,
            CsgNode::Cylinder(n) => n,
            CsgNode::ConvexPolygonExtrusion(n) => n,
            CsgNode::SolidUnion(n) => n,
            CsgNode::Difference(n) => n,
        }
    }
}

impl PointQuery for CsgNode {
    fn contains_point(&self, point: &Vec3) -> bool {
        self.as_query().contains_point(point)
    }

    fn is_point_on_boundary(&self, point: &Vec3) -> bool {
        self.as_query().is_point_on_boundary(point)
    }

    fn outward_normal_with(&self, point: &Vec3, precision: &Precision) -> Option<Direction> {
        self.as_query().outward_normal_with(point, precision)
    }

    fn face_normals(&self, point: &Vec3) -> Vec<Direction> {
        self.as_query().face_normals(point)
    }
}

impl fmt::Display for CsgNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsgNode::HalfSpace(n) => fmt::Display::fmt(n, f),
            CsgNode::RectangularPrism(n) => fmt::Display::fmt(n, f),
            CsgNode::Cylinder(n) => fmt::Display::fmt(n, f),
            CsgNode::ConvexPolygonExtrusion(n) => fmt::Display::fmt(n, f),
            CsgNode::SolidUnion(n) => fmt::Display::fmt(n, f),
            CsgNode::Difference(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl From<HalfSpace> for CsgNode {
    fn from(node: HalfSpace) -> Self {
        CsgNode::HalfSpace(node)
    }
}

impl From<RectangularPrism> for CsgNode {
    fn from(node: RectangularPrism) -> Self {
        CsgNode::RectangularPrism(node)
    }
}

impl From<Cylinder> for CsgNode {
    fn from(node: Cylinder) -> Self {
        CsgNode::Cylinder(node)
    }
}

impl From<ConvexPolygonExtrusion> for CsgNode {
    fn from(node: ConvexPolygonExtrusion) -> Self {
        CsgNode::ConvexPolygonExtrusion(node)
    }
}

impl From<SolidUnion> for CsgNode {
    fn from(node: SolidUnion) -> Self {
        CsgNode::SolidUnion(node)
    }
}

impl From<Difference> for CsgNode {
    fn from(node: Difference) -> Self {
        CsgNode::Difference(node)
    }
}

/// Shared display for an optional axial bound.
pub(crate) fn fmt_bound(bound: &Option<crate::geometry::Numeric>) -> String {
    match bound {
        Some(v) => v.to_string(),
        None => "unbounded".to_string(),
    }
}
