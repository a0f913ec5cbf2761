//! Polygon vertex: a position plus an interpolatable normal.

use crate::vector::{lerp_point, Point, Real, Vector};

/// A polygon corner.
///
/// The normal is carried along as an attribute (for shading or export) and is
/// never consulted when classifying or splitting geometry. It does not need to
/// be unit length.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: Point,
    pub normal: Vector,
}

impl Vertex {
    /// Creates a new vertex.
    pub const fn new(pos: Point, normal: Vector) -> Self {
        Self { pos, normal }
    }

    /// Negates the normal in place. Called whenever the owning polygon's
    /// winding is reversed.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }

    /// Returns a new vertex between `self` and `other`.
    ///
    /// Position and normal are both linearly interpolated at parameter `t`.
    pub fn interpolate(&self, other: &Vertex, t: Real) -> Vertex {
        Vertex {
            pos: lerp_point(&self.pos, &other.pos, t),
            normal: self.normal.lerp(&other.normal, t),
        }
    }
}
