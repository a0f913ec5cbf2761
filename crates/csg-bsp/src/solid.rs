//! Solids and the boolean operators over them.

use std::ops::{BitAnd, BitOr, Not, Sub};

use tracing::{debug, instrument, warn};

use crate::bsp::Node;
use crate::error::CsgError;
use crate::Polygon;

/// A closed polygon mesh describing a volume by its boundary.
///
/// A `Solid` is a flat list of polygons. BSP trees are built from it only
/// for the duration of a boolean operation and flattened back afterwards.
/// Every operator takes its operands by reference and returns a new solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid<S> {
    polygons: Vec<Polygon<S>>,
}

impl<S> Default for Solid<S> {
    fn default() -> Self {
        Self {
            polygons: Vec::new(),
        }
    }
}

impl<S> Solid<S> {
    /// Creates an empty solid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a list of polygons. No validation is performed.
    pub fn from_polygons(polygons: Vec<Polygon<S>>) -> Self {
        Self { polygons }
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon<S>] {
        &self.polygons
    }

    pub fn into_polygons(self) -> Vec<Polygon<S>> {
        self.polygons
    }

    /// Returns the number of polygons.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Checks every polygon with the rules of [`Polygon::try_new`],
    /// reporting the first failure.
    pub fn validate(&self) -> Result<(), CsgError> {
        for (index, polygon) in self.polygons.iter().enumerate() {
            if let Err(source) = polygon.validate() {
                warn!(index, %source, "invalid polygon in solid");
                return Err(CsgError::InvalidSolidPolygon { index, source });
            }
        }
        Ok(())
    }

    /// Replaces the tag of every polygon.
    pub fn map_shared<T, F>(self, mut f: F) -> Solid<T>
    where
        F: FnMut(Option<S>) -> Option<T>,
    {
        Solid {
            polygons: self
                .polygons
                .into_iter()
                .map(|p| p.map_shared(&mut f))
                .collect(),
        }
    }
}

impl<S: Clone> Solid<S> {
    /// Returns a new solid covering the space in `self` or in `other`.
    ///
    /// ```text
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   A   |            |       |
    ///     |    +--+----+   =   |       +----+
    ///     +----+--+    |       +----+       |
    ///          |   B   |            |       |
    ///          |       |            |       |
    ///          +-------+            +-------+
    /// ```
    #[instrument(skip_all, fields(a = self.len(), b = other.len()))]
    pub fn union(&self, other: &Solid<S>) -> Solid<S> {
        let mut a = Node::from_polygons(self.polygons.clone());
        let mut b = Node::from_polygons(other.polygons.clone());

        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());

        let result = Solid::from_polygons(a.into_polygons());
        debug!(polygons = result.len(), "union complete");
        result
    }

    /// Returns a new solid covering the space in `self` but not in `other`.
    ///
    /// ```text
    ///     +-------+            +-------+
    ///     |       |            |       |
    ///     |   A   |            |       |
    ///     |    +--+----+   =   |    +--+
    ///     +----+--+    |       +----+
    ///          |   B   |
    ///          |       |
    ///          +-------+
    /// ```
    #[instrument(skip_all, fields(a = self.len(), b = other.len()))]
    pub fn subtract(&self, other: &Solid<S>) -> Solid<S> {
        let mut a = Node::from_polygons(self.polygons.clone());
        let mut b = Node::from_polygons(other.polygons.clone());

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        a.invert();

        let result = Solid::from_polygons(a.into_polygons());
        debug!(polygons = result.len(), "subtract complete");
        result
    }

    /// Returns a new solid covering the space in both `self` and `other`.
    ///
    /// ```text
    ///     +-------+
    ///     |       |
    ///     |   A   |
    ///     |    +--+----+   =   +--+
    ///     +----+--+    |       +--+
    ///          |   B   |
    ///          |       |
    ///          +-------+
    /// ```
    #[instrument(skip_all, fields(a = self.len(), b = other.len()))]
    pub fn intersect(&self, other: &Solid<S>) -> Solid<S> {
        let mut a = Node::from_polygons(self.polygons.clone());
        let mut b = Node::from_polygons(other.polygons.clone());

        a.invert();
        b.clip_to(&a);
        b.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        a.build(b.all_polygons());
        a.invert();

        let result = Solid::from_polygons(a.into_polygons());
        debug!(polygons = result.len(), "intersect complete");
        result
    }

    /// Returns the complement of this solid: the same surface with every
    /// polygon flipped, so inside and outside trade places.
    pub fn inverse(&self) -> Solid<S> {
        Solid {
            polygons: self.polygons.iter().map(Polygon::flipped).collect(),
        }
    }
}

impl<S> FromIterator<Polygon<S>> for Solid<S> {
    fn from_iter<I: IntoIterator<Item = Polygon<S>>>(iter: I) -> Self {
        Self::from_polygons(iter.into_iter().collect())
    }
}

impl<S> IntoIterator for Solid<S> {
    type Item = Polygon<S>;
    type IntoIter = std::vec::IntoIter<Polygon<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Solid<S> {
    type Item = &'a Polygon<S>;
    type IntoIter = std::slice::Iter<'a, Polygon<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

impl<S: Clone> BitOr for &Solid<S> {
    type Output = Solid<S>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<S: Clone> Sub for &Solid<S> {
    type Output = Solid<S>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<S: Clone> BitAnd for &Solid<S> {
    type Output = Solid<S>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<S: Clone> Not for &Solid<S> {
    type Output = Solid<S>;

    fn not(self) -> Self::Output {
        self.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Point, Vector};
    use crate::{PlaneError, PolygonError, Vertex};

    fn make_quad(points: [[f64; 3]; 4], tag: char) -> Polygon<char> {
        Polygon::new(
            points
                .iter()
                .map(|p| Vertex::new(Point::from(*p), Vector::zeros()))
                .collect(),
            Some(tag),
        )
    }

    /// Axis-aligned box from `min` to `max` with outward faces.
    fn make_box(min: [f64; 3], max: [f64; 3], tag: char) -> Solid<char> {
        let [x0, y0, z0] = min;
        let [x1, y1, z1] = max;
        Solid::from_polygons(vec![
            make_quad([[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]], tag),
            make_quad([[x1, y0, z0], [x1, y1, z0], [x1, y1, z1], [x1, y0, z1]], tag),
            make_quad([[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]], tag),
            make_quad([[x0, y1, z0], [x0, y1, z1], [x1, y1, z1], [x1, y1, z0]], tag),
            make_quad([[x0, y0, z0], [x0, y1, z0], [x1, y1, z0], [x1, y0, z0]], tag),
            make_quad([[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]], tag),
        ])
    }

    #[test]
    fn box_faces_point_outward() {
        let solid = make_box([0.0; 3], [1.0; 3], 'a');
        for polygon in solid.polygons() {
            let outward = polygon.centroid() - Point::new(0.5, 0.5, 0.5);
            assert!(polygon.plane().normal().dot(&outward) > 0.0);
        }
    }

    #[test]
    fn operators_do_not_modify_operands() {
        let a = make_box([0.0; 3], [1.0; 3], 'a');
        let b = make_box([0.5; 3], [1.5; 3], 'b');
        let (a_before, b_before) = (a.clone(), b.clone());

        let _ = a.union(&b);
        let _ = a.subtract(&b);
        let _ = a.intersect(&b);
        let _ = a.inverse();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn operator_traits_delegate() {
        let a = make_box([0.0; 3], [1.0; 3], 'a');
        let b = make_box([0.5; 3], [1.5; 3], 'b');

        assert_eq!(&a | &b, a.union(&b));
        assert_eq!(&a - &b, a.subtract(&b));
        assert_eq!(&a & &b, a.intersect(&b));
        assert_eq!(!&a, a.inverse());
    }

    #[test]
    fn inverse_flips_every_polygon() {
        let a = make_box([0.0; 3], [1.0; 3], 'a');
        let inv = a.inverse();

        assert_eq!(inv.len(), a.len());
        for (original, flipped) in a.polygons().iter().zip(inv.polygons()) {
            assert_eq!(flipped, &original.flipped());
        }
        assert_eq!(inv.inverse(), a);
    }

    #[test]
    fn subtract_keeps_tags_of_both_operands() {
        let a = make_box([0.0; 3], [1.0; 3], 'a');
        let b = make_box([0.5; 3], [1.5; 3], 'b');

        let result = a.subtract(&b);
        let tags: Vec<char> = result.polygons().iter().filter_map(|p| p.shared().copied()).collect();

        assert_eq!(tags.len(), result.len());
        assert!(tags.contains(&'a'));
        // The carved-out walls come from B.
        assert!(tags.contains(&'b'));
    }

    #[test]
    fn empty_operands() {
        let a = make_box([0.0; 3], [1.0; 3], 'a');
        let empty = Solid::new();

        assert_eq!(a.union(&empty).len(), 6);
        assert_eq!(empty.union(&a).len(), 6);
        assert_eq!(a.subtract(&empty).len(), 6);
    }

    #[test]
    fn validate_reports_failing_index() {
        let mut polygons = make_box([0.0; 3], [1.0; 3], 'a').into_polygons();
        polygons.push(make_quad(
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            'x',
        ));
        let solid = Solid::from_polygons(polygons);

        match solid.validate() {
            Err(CsgError::InvalidSolidPolygon { index, source }) => {
                assert_eq!(index, 6);
                assert_eq!(source, PolygonError::Plane(PlaneError::Degenerate));
            }
            other => panic!("expected invalid polygon error, got {other:?}"),
        }
        assert!(make_box([0.0; 3], [1.0; 3], 'a').validate().is_ok());
    }

    #[test]
    fn map_shared_and_iteration() {
        let solid = make_box([0.0; 3], [1.0; 3], 'a').map_shared(|tag| tag.map(u32::from));
        assert!((&solid).into_iter().all(|p| p.shared() == Some(&97)));

        let rebuilt: Solid<u32> = solid.clone().into_iter().collect();
        assert_eq!(rebuilt, solid);
    }
}
