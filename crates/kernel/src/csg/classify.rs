use crate::geometry::Vec3;

use super::{CsgNode, PointQuery};

/// Classification of a point relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointClassification {
    /// Strictly interior.
    Inside,
    Outside,
    OnBoundary,
}

impl PointClassification {
    /// Inside or on the boundary.
    pub fn is_contained(self) -> bool {
        !matches!(self, PointClassification::Outside)
    }
}

/// Classify a point relative to a CSG tree.
pub fn classify_point(node: &CsgNode, point: &Vec3) -> PointClassification {
    node.classify(point)
}
