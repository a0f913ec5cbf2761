//! Convex polygon with an opaque per-face tag.

use tracing::warn;

use crate::error::PolygonError;
use crate::vector::{is_finite_point, Point, Real, Vector};
use crate::{Classification, Plane, PlaneSide, Vertex, PLANE_EPSILON};

/// A convex polygon in 3D space, defined by an ordered loop of vertices.
///
/// Vertices should be coplanar and in counter-clockwise winding order
/// when viewed from the front (the direction the normal points).
///
/// `S` is a caller-defined tag (a colour, a material id, ...) that the
/// boolean machinery never looks at. It is cloned onto every fragment a
/// polygon is split into, so all pieces of one input face keep its tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<S> {
    vertices: Vec<Vertex>,
    shared: Option<S>,
    plane: Plane,
}

impl<S> Polygon<S> {
    /// Creates a new polygon from a list of vertices.
    ///
    /// The plane is derived from the first three vertices. No validation is
    /// done in release builds; see [`Polygon::try_new`].
    ///
    /// # Panics
    /// Panics if fewer than 3 vertices are provided. In debug builds also
    /// panics if the vertices are not coplanar.
    pub fn new(vertices: Vec<Vertex>, shared: Option<S>) -> Self {
        debug_assert!(
            vertices.len() >= 3,
            "Polygon must have at least 3 vertices"
        );
        let plane = Plane::from_points(&vertices[0].pos, &vertices[1].pos, &vertices[2].pos);
        debug_assert!(
            vertices[3..]
                .iter()
                .all(|v| plane.classify_point(&v.pos) == PlaneSide::OnPlane),
            "Polygon vertices must be coplanar"
        );
        Self {
            vertices,
            shared,
            plane,
        }
    }

    /// Creates a polygon after checking that it is well formed: at least
    /// three finite vertices, a non-degenerate leading triangle, and every
    /// vertex within [`PLANE_EPSILON`] of the derived plane.
    ///
    /// Convexity is not checked.
    pub fn try_new(vertices: Vec<Vertex>, shared: Option<S>) -> Result<Self, PolygonError> {
        Self::validate_vertices(&vertices).inspect_err(|err| {
            warn!(%err, vertex_count = vertices.len(), "rejected polygon");
        })?;
        Ok(Self::new(vertices, shared))
    }

    fn validate_vertices(vertices: &[Vertex]) -> Result<Plane, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices(vertices.len()));
        }
        if let Some(index) = vertices.iter().position(|v| !is_finite_point(&v.pos)) {
            return Err(PolygonError::NonFinite(index));
        }

        let plane = Plane::try_from_points(&vertices[0].pos, &vertices[1].pos, &vertices[2].pos)?;
        for (index, v) in vertices.iter().enumerate().skip(3) {
            let distance = plane.signed_distance(&v.pos);
            if distance.abs() > PLANE_EPSILON {
                return Err(PolygonError::NonCoplanar { index, distance });
            }
        }
        Ok(plane)
    }

    /// Checks this polygon with the same rules as [`Polygon::try_new`].
    pub fn validate(&self) -> Result<(), PolygonError> {
        Self::validate_vertices(&self.vertices).map(|_| ())
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Consumes the polygon, returning its vertices.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    /// Returns the caller-defined tag, if any.
    #[inline]
    pub fn shared(&self) -> Option<&S> {
        self.shared.as_ref()
    }

    /// Returns the plane that this polygon lies on.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices (always false for valid polygons).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Reverses the winding, flips every vertex normal and flips the plane.
    ///
    /// The result bounds the same region with solid and empty swapped.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }

    /// Computes the centroid (average of the vertices) of the polygon.
    pub fn centroid(&self) -> Point {
        let sum: Vector = self.vertices.iter().map(|v| v.pos.coords).sum();
        Point::from(sum / self.vertices.len() as Real)
    }

    /// Classifies this polygon relative to a plane.
    ///
    /// Returns the bitwise OR of the per-vertex classifications:
    /// - `Coplanar` if all vertices lie on the plane
    /// - `Front` if no vertex is behind the plane
    /// - `Back` if no vertex is in front of the plane
    /// - `Spanning` if vertices are on both sides
    pub fn classify(&self, plane: &Plane) -> Classification {
        self.vertices
            .iter()
            .map(|v| Classification::from(plane.classify_point(&v.pos)))
            .fold(Classification::Coplanar, |acc, c| acc | c)
    }

    /// Replaces the tag, keeping the geometry.
    pub fn map_shared<T, F>(self, f: F) -> Polygon<T>
    where
        F: FnOnce(Option<S>) -> Option<T>,
    {
        Polygon {
            vertices: self.vertices,
            shared: f(self.shared),
            plane: self.plane,
        }
    }
}

impl<S: Clone> Polygon<S> {
    /// Returns a flipped copy of this polygon.
    pub fn flipped(&self) -> Self {
        let mut polygon = self.clone();
        polygon.flip();
        polygon
    }
}

impl<S> From<&Polygon<S>> for Plane {
    fn from(polygon: &Polygon<S>) -> Self {
        polygon.plane().clone()
    }
}
