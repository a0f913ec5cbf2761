//! Scalar and vector types used throughout the crate.
//!
//! Vector arithmetic is delegated to nalgebra:
//!
//! | operation        | nalgebra                 |
//! |------------------|--------------------------|
//! | plus / minus     | `a + b`, `a - b`         |
//! | times / divided  | `a * s`, `a / s`         |
//! | dot / cross      | `a.dot(&b)`, `a.cross(&b)` |
//! | lerp             | `a.lerp(&b, t)`          |
//! | length           | `a.norm()`               |
//! | unit             | `a.normalize()`          |
//!
//! `normalize` is not guarded: a zero-length vector produces NaN components.

use nalgebra::{Point3, Vector3};

/// Floating point type for all coordinates.
pub type Real = f64;

/// A direction or displacement in 3D space.
pub type Vector = Vector3<Real>;

/// A position in 3D space.
pub type Point = Point3<Real>;

/// Linearly interpolates between two points: `a + (b - a) * t`.
#[inline]
pub fn lerp_point(a: &Point, b: &Point, t: Real) -> Point {
    a + (b - a) * t
}

/// Returns `true` if every component of the point is finite.
#[inline]
pub fn is_finite_point(p: &Point) -> bool {
    p.coords.iter().all(|c| c.is_finite())
}
