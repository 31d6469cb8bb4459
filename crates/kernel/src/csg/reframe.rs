//! Rigid re-placement of whole CSG trees.
//!
//! A cut is usually authored in one timber's local frame and later applied
//! to another timber. [`CsgNode::reframed`] moves a tree between frames
//! without changing which points it contains.

use tracing::instrument;

use crate::geometry::Transform;

use super::{CsgNode, Difference, SolidUnion};

impl CsgNode {
    /// Apply `transform` to every solid in the tree.
    ///
    /// For the result `r`, `r.contains_point(&transform.local_to_global(p))`
    /// equals `self.contains_point(p)`, and likewise for the other queries.
    #[instrument(skip_all)]
    pub fn transformed(&self, transform: &Transform) -> CsgNode {
        self.apply(transform)
    }

    /// Move a tree expressed in `from`'s local coordinates into `to`'s local
    /// coordinates.
    #[instrument(skip_all)]
    pub fn reframed(&self, from: &Transform, to: &Transform) -> CsgNode {
        self.apply(&to.invert().compose(from))
    }

    fn apply(&self, t: &Transform) -> CsgNode {
        match self {
            CsgNode::HalfSpace(h) => h.transformed(t).into(),
            CsgNode::RectangularPrism(p) => p.transformed(t).into(),
            CsgNode::Cylinder(c) => c.transformed(t).into(),
            CsgNode::ConvexPolygonExtrusion(e) => e.transformed(t).into(),
            CsgNode::SolidUnion(u) => {
                SolidUnion::new(u.children().iter().map(|c| c.apply(t)).collect()).into()
            }
            CsgNode::Difference(d) => Difference::new(
                d.base().apply(t),
                d.subtract().iter().map(|c| c.apply(t)).collect(),
            )
            .into(),
        }
    }
}
