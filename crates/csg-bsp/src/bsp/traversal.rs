//! Viewpoint-ordered traversal.

use crate::vector::Point;
use crate::PlaneSide;

use super::node::Node;
use super::visitor::BspVisitor;

impl<S> Node<S> {
    /// Traverses the tree front-to-back relative to the given viewpoint.
    ///
    /// The visitor's `visit` method is called once per non-empty node with
    /// that node's polygons, nearest first.
    pub fn traverse_front_to_back<V: BspVisitor<S>>(&self, eye: &Point, visitor: &mut V) {
        let Some(plane) = self.plane() else {
            return;
        };
        let (near, far) = match plane.classify_point(eye) {
            PlaneSide::Front | PlaneSide::OnPlane => (self.front(), self.back()),
            PlaneSide::Back => (self.back(), self.front()),
        };

        if let Some(near) = near {
            near.traverse_front_to_back(eye, visitor);
        }
        if !self.polygons().is_empty() {
            visitor.visit(self.polygons());
        }
        if let Some(far) = far {
            far.traverse_front_to_back(eye, visitor);
        }
    }

    /// Traverses the tree back-to-front relative to the given viewpoint.
    ///
    /// This is the painter's algorithm order: farthest polygons first.
    pub fn traverse_back_to_front<V: BspVisitor<S>>(&self, eye: &Point, visitor: &mut V) {
        let Some(plane) = self.plane() else {
            return;
        };
        let (near, far) = match plane.classify_point(eye) {
            PlaneSide::Front | PlaneSide::OnPlane => (self.front(), self.back()),
            PlaneSide::Back => (self.back(), self.front()),
        };

        if let Some(far) = far {
            far.traverse_back_to_front(eye, visitor);
        }
        if !self.polygons().is_empty() {
            visitor.visit(self.polygons());
        }
        if let Some(near) = near {
            near.traverse_back_to_front(eye, visitor);
        }
    }
}
