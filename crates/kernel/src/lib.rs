pub mod csg;
pub mod error;
pub mod geometry;
pub mod validation;

// Re-export the query surface at crate root for convenience.
pub use csg::classify::{classify_point, PointClassification};
pub use csg::{
    ConvexPolygonExtrusion, CsgNode, Cylinder, Difference, HalfSpace, PointQuery,
    RectangularPrism, SolidUnion,
};
pub use error::CsgError;
pub use geometry::{Direction, Numeric, Orientation, Transform, Vec2, Vec3};
pub use validation::{validate_tree, ValidationConfig, ValidationReport};

/// Precision used where an exact result would need an irrational number.
///
/// Containment and boundary tests never consult this; it only governs how
/// unit normals of irrational length are rounded before they are averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    /// Fractional bits kept when approximating a square root.
    pub sqrt_bits: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Self { sqrt_bits: 64 }
    }
}

/// Precision used by the plain query methods.
pub fn default_precision() -> Precision {
    Precision::default()
}
