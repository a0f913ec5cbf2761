//! Plane representation and the polygon splitting routine at the heart of
//! every BSP operation.

use std::ops::BitOr;

use crate::error::PlaneError;
use crate::vector::{Point, Real, Vector};
use crate::{Polygon, Vertex};

/// Tolerance used when classifying points against a plane.
/// Points within this distance of the plane are considered "on" the plane.
pub const PLANE_EPSILON: Real = 1e-5;

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Point is in front of the plane (positive side of normal)
    Front,
    /// Point is behind the plane (negative side of normal)
    Back,
    /// Point lies on the plane (within epsilon tolerance)
    OnPlane,
}

/// Classification of a vertex or a whole polygon relative to a plane.
///
/// The discriminants are bit codes: a polygon's classification is the
/// bitwise OR of its vertices' classifications, so one vertex in front and
/// one behind combine to [`Classification::Spanning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Classification {
    /// All vertices lie on the plane
    Coplanar = 0,
    /// No vertex is behind the plane, at least one is in front
    Front = 1,
    /// No vertex is in front of the plane, at least one is behind
    Back = 2,
    /// Vertices lie on both sides of the plane
    Spanning = 3,
}

impl Classification {
    #[inline]
    fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Classification::Coplanar,
            1 => Classification::Front,
            2 => Classification::Back,
            _ => Classification::Spanning,
        }
    }
}

impl BitOr for Classification {
    type Output = Classification;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Classification::from_bits(self as u8 | rhs as u8)
    }
}

impl From<PlaneSide> for Classification {
    #[inline]
    fn from(side: PlaneSide) -> Self {
        match side {
            PlaneSide::Front => Classification::Front,
            PlaneSide::Back => Classification::Back,
            PlaneSide::OnPlane => Classification::Coplanar,
        }
    }
}

/// Destination of a polygon (or fragment) produced by [`Plane::split_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitSide {
    /// On the plane, facing the same way as the plane normal
    CoplanarFront,
    /// On the plane, facing against the plane normal
    CoplanarBack,
    Front,
    Back,
}

/// A plane in 3D space, represented as `normal · point = w`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    normal: Vector,
    w: Real,
}

impl Plane {
    /// Creates a new plane from a normal vector and offset.
    /// Both are scaled so the stored normal has unit length.
    ///
    /// A zero normal is not rejected and yields a non-finite plane; use
    /// [`Plane::try_new`] to check.
    pub fn new(normal: Vector, w: Real) -> Self {
        let norm = normal.norm();
        Self {
            normal: normal / norm,
            w: w / norm,
        }
    }

    /// Like [`Plane::new`] but rejects a zero-length normal.
    pub fn try_new(normal: Vector, w: Real) -> Result<Self, PlaneError> {
        if !(normal.norm() > Real::EPSILON) {
            return Err(PlaneError::ZeroNormal);
        }
        Ok(Self::new(normal, w))
    }

    /// Creates a plane from three points.
    /// The normal direction follows the right-hand rule: (b - a) × (c - a).
    ///
    /// Collinear points are not rejected; the resulting plane has NaN
    /// components. Use [`Plane::try_from_points`] when the input is untrusted.
    pub fn from_points(a: &Point, b: &Point, c: &Point) -> Self {
        let normal = (b - a).cross(&(c - a)).normalize();
        let w = normal.dot(&a.coords);
        Self { normal, w }
    }

    /// Creates a plane from three points, failing if they are collinear.
    pub fn try_from_points(a: &Point, b: &Point, c: &Point) -> Result<Self, PlaneError> {
        let cross = (b - a).cross(&(c - a));
        if !(cross.norm() > Real::EPSILON) {
            return Err(PlaneError::Degenerate);
        }
        Ok(Self::from_points(a, b, c))
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector {
        self.normal
    }

    /// Returns the signed distance from the origin to the plane along the normal.
    #[inline]
    pub fn w(&self) -> Real {
        self.w
    }

    /// Computes the signed distance from a point to the plane.
    /// - Positive: point is in front (same side as normal)
    /// - Negative: point is behind (opposite side from normal)
    /// - Zero: point is on the plane
    #[inline]
    pub fn signed_distance(&self, point: &Point) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Classifies which side of the plane a point lies on.
    /// Uses the default `PLANE_EPSILON` tolerance.
    #[inline]
    pub fn classify_point(&self, point: &Point) -> PlaneSide {
        self.classify_point_with_epsilon(point, PLANE_EPSILON)
    }

    /// Classifies which side of the plane a point lies on, with a custom epsilon.
    pub fn classify_point_with_epsilon(&self, point: &Point, epsilon: Real) -> PlaneSide {
        let dist = self.signed_distance(point);
        if dist < -epsilon {
            PlaneSide::Back
        } else if dist > epsilon {
            PlaneSide::Front
        } else {
            PlaneSide::OnPlane
        }
    }

    /// Swaps the front and back sense of the plane in place.
    #[inline]
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Returns a new plane with the normal flipped (facing the opposite direction).
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            w: -self.w,
        }
    }

    /// Projects a point onto the plane (finds the closest point on the plane).
    #[inline]
    pub fn project_point(&self, point: &Point) -> Point {
        point - self.normal * self.signed_distance(point)
    }

    /// Splits `polygon` by this plane, appending the results to the four lists.
    ///
    /// - Coplanar polygons go to `coplanar_front` when they face the same way
    ///   as this plane and to `coplanar_back` otherwise.
    /// - Polygons entirely on one side go whole to `front` or `back`.
    /// - Spanning polygons are cut in two; fragments with fewer than three
    ///   vertices are dropped.
    ///
    /// Every output polygon carries the input's shared tag.
    pub fn split_polygon<S: Clone>(
        &self,
        polygon: &Polygon<S>,
        coplanar_front: &mut Vec<Polygon<S>>,
        coplanar_back: &mut Vec<Polygon<S>>,
        front: &mut Vec<Polygon<S>>,
        back: &mut Vec<Polygon<S>>,
    ) {
        self.split_with(polygon, |side, piece| match side {
            SplitSide::CoplanarFront => coplanar_front.push(piece),
            SplitSide::CoplanarBack => coplanar_back.push(piece),
            SplitSide::Front => front.push(piece),
            SplitSide::Back => back.push(piece),
        });
    }

    /// Splits `polygon` by this plane and hands every resulting piece to `emit`
    /// together with where it belongs.
    ///
    /// This is the routing-agnostic form of [`Plane::split_polygon`]; callers
    /// that want coplanar pieces merged with another output (clipping does)
    /// route them in the closure.
    pub fn split_with<S, F>(&self, polygon: &Polygon<S>, mut emit: F)
    where
        S: Clone,
        F: FnMut(SplitSide, Polygon<S>),
    {
        let vertices = polygon.vertices();

        let mut polygon_type = Classification::Coplanar;
        let types: Vec<Classification> = vertices
            .iter()
            .map(|v| {
                let t = Classification::from(self.classify_point(&v.pos));
                polygon_type = polygon_type | t;
                t
            })
            .collect();

        match polygon_type {
            Classification::Coplanar => {
                let side = if self.normal.dot(&polygon.plane().normal()) > 0.0 {
                    SplitSide::CoplanarFront
                } else {
                    SplitSide::CoplanarBack
                };
                emit(side, polygon.clone());
            }
            Classification::Front => emit(SplitSide::Front, polygon.clone()),
            Classification::Back => emit(SplitSide::Back, polygon.clone()),
            Classification::Spanning => {
                let n = vertices.len();
                let mut front_verts: Vec<Vertex> = Vec::with_capacity(n + 1);
                let mut back_verts: Vec<Vertex> = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let j = (i + 1) % n;
                    let (ti, tj) = (types[i], types[j]);
                    let (vi, vj) = (&vertices[i], &vertices[j]);

                    if ti != Classification::Back {
                        front_verts.push(vi.clone());
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi.clone());
                    }

                    // Edge crosses from front to back (or back to front).
                    if (ti | tj) == Classification::Spanning {
                        let t = (self.w - self.normal.dot(&vi.pos.coords))
                            / self.normal.dot(&(vj.pos - vi.pos));
                        let v = vi.interpolate(vj, t);
                        front_verts.push(v.clone());
                        back_verts.push(v);
                    }
                }

                if front_verts.len() >= 3 {
                    emit(
                        SplitSide::Front,
                        Polygon::new(front_verts, polygon.shared().cloned()),
                    );
                }
                if back_verts.len() >= 3 {
                    emit(
                        SplitSide::Back,
                        Polygon::new(back_verts, polygon.shared().cloned()),
                    );
                }
            }
        }
    }
}
