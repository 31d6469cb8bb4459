use std::fmt;

use tracing::trace;

use crate::geometry::{Direction, Vec3};
use crate::Precision;

use super::{CsgNode, PointClassification, PointQuery};

/// N-ary union. An empty union contains nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidUnion {
    children: Vec<CsgNode>,
}

impl SolidUnion {
    pub fn new(children: Vec<CsgNode>) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &[CsgNode] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The union's surface through a point no child holds strictly inside.
    ///
    /// A child's face is glued when another child on its boundary has a face
    /// there pointing exactly the opposite way; such faces are buried in the
    /// union. Returns `None` when some child has the point in its interior.
    fn surface_at(&self, point: &Vec3) -> Option<SurfaceAt> {
        let mut faces: Vec<Vec<Direction>> = Vec::new();
        let mut undetermined = false;
        for (i, child) in self.children.iter().enumerate() {
            match child.classify(point) {
                PointClassification::Inside => {
                    trace!(child = i, "point interior to union child");
                    return None;
                }
                PointClassification::OnBoundary => {
                    let normals = child.face_normals(point);
                    undetermined |= normals.is_empty();
                    faces.push(normals);
                }
                PointClassification::Outside => {}
            }
        }

        let exposed: Vec<Vec<Direction>> = faces
            .iter()
            .enumerate()
            .map(|(i, own)| {
                own.iter()
                    .filter(|n| {
                        !faces
                            .iter()
                            .enumerate()
                            .any(|(j, other)| j != i && other.iter().any(|m| m.is_opposite(n)))
                    })
                    .cloned()
                    .collect()
            })
            .collect();
        Some(SurfaceAt {
            exposed,
            undetermined,
        })
    }
}

/// Faces of the boundary children at a point, per child, with glued faces
/// removed.
struct SurfaceAt {
    exposed: Vec<Vec<Direction>>,
    /// Some boundary child could not name any face at the point.
    undetermined: bool,
}

impl SurfaceAt {
    fn is_surface(&self) -> bool {
        self.undetermined || self.exposed.iter().any(|faces| !faces.is_empty())
    }
}

impl PointQuery for SolidUnion {
    fn contains_point(&self, point: &Vec3) -> bool {
        self.children.iter().any(|c| c.contains_point(point))
    }

    /// A point is on the union's surface when some child has it on its
    /// surface, no child has it strictly inside, and at least one of the
    /// faces through it is not glued to another child.
    fn is_point_on_boundary(&self, point: &Vec3) -> bool {
        let on_surface = self.surface_at(point).is_some_and(|s| s.is_surface());
        if !on_surface {
            trace!("point buried in union");
        }
        on_surface
    }

    /// Average over the boundary children of each child's highest-priority
    /// exposed face.
    fn outward_normal_with(&self, point: &Vec3, precision: &Precision) -> Option<Direction> {
        let surface = self.surface_at(point)?;
        let normals = surface
            .exposed
            .into_iter()
            .filter_map(|faces| faces.into_iter().next());
        Direction::average(normals, precision)
    }

    fn face_normals(&self, point: &Vec3) -> Vec<Direction> {
        self.surface_at(point)
            .map(|s| s.exposed.into_iter().flatten().collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for SolidUnion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SolidUnion({} children)", self.children.len())
    }
}
