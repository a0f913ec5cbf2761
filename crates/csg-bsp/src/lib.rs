//! Constructive solid geometry on polygon meshes using BSP trees.
//!
//! Two solids are combined by building a BSP tree from each, clipping each
//! tree against the other (inverting trees where the operation calls for a
//! complement) and merging what survives:
//!
//! ```
//! use csg_bsp::{Point, Polygon, Solid, Vector, Vertex};
//!
//! fn tetrahedron(offset: f64) -> Solid<()> {
//!     let p = |x: f64, y: f64, z: f64| Point::new(x + offset, y + offset, z + offset);
//!     let (o, x, y, z) = (p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 1.0));
//!     let tri = |a: Point, b: Point, c: Point| {
//!         let n = (b - a).cross(&(c - a)).normalize();
//!         Polygon::new(vec![Vertex::new(a, n), Vertex::new(b, n), Vertex::new(c, n)], None)
//!     };
//!     Solid::from_polygons(vec![tri(o, y, x), tri(o, x, z), tri(o, z, y), tri(x, y, z)])
//! }
//!
//! let a = tetrahedron(0.0);
//! let far = tetrahedron(10.0);
//!
//! assert_eq!(a.union(&far).len(), 8);
//! assert!(a.intersect(&far).is_empty());
//! assert_eq!(a.subtract(&far).len(), 4);
//! ```
//!
//! Polygons carry an optional caller-defined tag `S` that is copied onto every
//! fragment, so per-face data (colour, material) survives the operations.

pub mod bsp;
mod error;
mod plane;
mod polygon;
mod solid;
mod vector;
mod vertex;

pub use error::{CsgError, PlaneError, PolygonError};
pub use plane::{Classification, Plane, PlaneSide, SplitSide, PLANE_EPSILON};
pub use polygon::Polygon;
pub use solid::Solid;
pub use vector::{Point, Real, Vector};
pub use vertex::Vertex;
