//! Binary Space Partitioning tree over polygons.
//!
//! A BSP tree recursively partitions space using planes taken from its
//! input polygons. Read as a solid, the tree classifies every point of
//! space as inside or outside, which is what the boolean operators on
//! [`Solid`](crate::Solid) are built on:
//!
//! - [`Node::build`] inserts polygons, splitting them where they span a plane
//! - [`Node::invert`] swaps inside and outside
//! - [`Node::clip_polygons`] / [`Node::clip_to`] remove what lies inside another tree
//! - [`Node::all_polygons`] flattens the tree back into a list
//!
//! Trees can also be walked in visibility order relative to a viewpoint:
//!
//! ```
//! use csg_bsp::bsp::{CollectingVisitor, Node};
//! use csg_bsp::{Point, Polygon, Vector, Vertex};
//!
//! let tri = |z: f64| {
//!     Polygon::<()>::new(
//!         vec![
//!             Vertex::new(Point::new(0.0, 0.0, z), Vector::z()),
//!             Vertex::new(Point::new(1.0, 0.0, z), Vector::z()),
//!             Vertex::new(Point::new(0.0, 1.0, z), Vector::z()),
//!         ],
//!         None,
//!     )
//! };
//! let tree = Node::from_polygons(vec![tri(-1.0), tri(1.0)]);
//!
//! let mut visitor = CollectingVisitor::new();
//! tree.traverse_back_to_front(&Point::new(0.0, 0.0, 10.0), &mut visitor);
//! assert_eq!(visitor.polygons()[0].centroid().z, -1.0);
//! ```

mod node;
mod traversal;
mod visitor;

pub use node::Node;
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor};
