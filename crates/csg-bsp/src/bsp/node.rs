//! BSP tree node implementation.

use tracing::trace;

use crate::plane::SplitSide;
use crate::{Plane, Polygon};

/// A node in the BSP tree.
///
/// Each node partitions space using a splitting plane and stores the polygons
/// that lie on that plane (in either orientation). Everything in front of the
/// plane lives in the `front` subtree, everything behind it in `back`.
///
/// A node without a plane is empty: nothing has been built into it yet.
/// A missing `back` child below a non-empty node means "solid all the way
/// back", which is what [`Node::clip_polygons`] relies on.
#[derive(Debug, Clone)]
pub struct Node<S> {
    /// The splitting plane for this node.
    plane: Option<Plane>,

    /// Subtree containing polygons in FRONT of the splitting plane.
    front: Option<Box<Node<S>>>,

    /// Subtree containing polygons BEHIND the splitting plane.
    back: Option<Box<Node<S>>>,

    /// Polygons lying on the plane, facing either way.
    polygons: Vec<Polygon<S>>,
}

impl<S> Default for Node<S> {
    fn default() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            polygons: Vec::new(),
        }
    }
}

impl<S> Node<S> {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the splitting plane, or `None` for an empty node.
    #[inline]
    pub fn plane(&self) -> Option<&Plane> {
        self.plane.as_ref()
    }

    /// Returns the polygons stored at this node.
    #[inline]
    pub fn polygons(&self) -> &[Polygon<S>] {
        &self.polygons
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&Node<S>> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&Node<S>> {
        self.back.as_deref()
    }

    /// Returns `true` if nothing has been built into this node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.plane.is_none()
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Returns the total number of polygons in this subtree (including all descendants).
    pub fn polygon_count(&self) -> usize {
        let mut count = self.polygons.len();

        if let Some(ref front) = self.front {
            count += front.polygon_count();
        }
        if let Some(ref back) = self.back {
            count += back.polygon_count();
        }

        count
    }

    /// Returns the depth of this subtree (1 for a leaf node, 0 if empty).
    pub fn depth(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front_depth.max(back_depth)
    }

    /// Turns the tree inside out: every polygon and plane is flipped and
    /// every front/back pair swapped, so solid space becomes empty space and
    /// vice versa.
    pub fn invert(&mut self) {
        for polygon in &mut self.polygons {
            polygon.flip();
        }
        if let Some(ref mut plane) = self.plane {
            plane.flip();
        }
        if let Some(ref mut front) = self.front {
            front.invert();
        }
        if let Some(ref mut back) = self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Flattens the tree into its polygons (node, then front, then back),
    /// consuming it.
    pub fn into_polygons(self) -> Vec<Polygon<S>> {
        let mut result = Vec::new();
        collect_owned(self, &mut result);
        result
    }
}

impl<S: Clone> Node<S> {
    /// Builds a tree from a list of polygons.
    pub fn from_polygons(polygons: Vec<Polygon<S>>) -> Self {
        let mut node = Self::new();
        node.build(polygons);
        trace!(
            polygons = node.polygon_count(),
            depth = node.depth(),
            "built bsp tree"
        );
        node
    }

    /// Inserts polygons into the tree.
    ///
    /// An empty node adopts the plane of the first polygon. Each polygon is
    /// split by this node's plane: pieces lying on it are kept here, the rest
    /// are pushed down into the front or back subtree, creating it if needed.
    /// Calling `build` on an existing tree extends it rather than rebuilding.
    pub fn build(&mut self, polygons: Vec<Polygon<S>>) {
        let Some(first) = polygons.first() else {
            return;
        };
        let plane = self
            .plane
            .get_or_insert_with(|| first.plane().clone())
            .clone();

        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in &polygons {
            plane.split_with(polygon, |side, piece| match side {
                SplitSide::CoplanarFront | SplitSide::CoplanarBack => self.polygons.push(piece),
                SplitSide::Front => front.push(piece),
                SplitSide::Back => back.push(piece),
            });
        }

        if !front.is_empty() {
            self.front.get_or_insert_with(Box::default).build(front);
        }
        if !back.is_empty() {
            self.back.get_or_insert_with(Box::default).build(back);
        }
    }

    /// Removes every part of `polygons` that lies inside the solid
    /// described by this tree and returns what is left.
    ///
    /// Pieces on a splitting plane follow their facing: same direction as
    /// the plane goes with the front pieces, opposite with the back. Pieces
    /// that end up behind a plane with no back subtree are inside and are
    /// dropped.
    pub fn clip_polygons(&self, polygons: &[Polygon<S>]) -> Vec<Polygon<S>> {
        let Some(ref plane) = self.plane else {
            return polygons.to_vec();
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in polygons {
            plane.split_with(polygon, |side, piece| match side {
                SplitSide::CoplanarFront | SplitSide::Front => front.push(piece),
                SplitSide::CoplanarBack | SplitSide::Back => back.push(piece),
            });
        }

        let mut result = match self.front {
            Some(ref f) => f.clip_polygons(&front),
            None => front,
        };
        if let Some(ref b) = self.back {
            result.extend(b.clip_polygons(&back));
        }
        result
    }

    /// Removes every part of this tree's polygons that lies inside `other`.
    pub fn clip_to(&mut self, other: &Node<S>) {
        self.polygons = other.clip_polygons(&self.polygons);
        if let Some(ref mut front) = self.front {
            front.clip_to(other);
        }
        if let Some(ref mut back) = self.back {
            back.clip_to(other);
        }
    }

    /// Collects all polygons in the tree: this node's, then the front
    /// subtree's, then the back subtree's.
    pub fn all_polygons(&self) -> Vec<Polygon<S>> {
        let mut result = Vec::with_capacity(self.polygon_count());
        collect_cloned(self, &mut result);
        result
    }
}

fn collect_cloned<S: Clone>(node: &Node<S>, result: &mut Vec<Polygon<S>>) {
    result.extend(node.polygons.iter().cloned());
    if let Some(ref front) = node.front {
        collect_cloned(front, result);
    }
    if let Some(ref back) = node.back {
        collect_cloned(back, result);
    }
}

fn collect_owned<S>(node: Node<S>, result: &mut Vec<Polygon<S>>) {
    result.extend(node.polygons);
    if let Some(front) = node.front {
        collect_owned(*front, result);
    }
    if let Some(back) = node.back {
        collect_owned(*back, result);
    }
}
