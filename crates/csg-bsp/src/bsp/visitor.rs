//! Visitor pattern for BSP tree traversal.
//!
//! Visitors allow custom processing of polygons during tree traversal
//! without coupling traversal logic to specific use cases.

use crate::Polygon;

/// Visitor for processing polygons during BSP tree traversal.
///
/// Implement this trait to define custom behavior when traversing the tree,
/// such as drawing with the painter's algorithm.
pub trait BspVisitor<S> {
    /// Called for each group of coplanar polygons during traversal.
    ///
    /// The polygons passed to this method all belong to the same BSP node.
    fn visit(&mut self, polygons: &[Polygon<S>]);
}

/// A simple visitor that collects all visited polygons.
#[derive(Debug)]
pub struct CollectingVisitor<S> {
    collected: Vec<Polygon<S>>,
}

impl<S> Default for CollectingVisitor<S> {
    fn default() -> Self {
        Self {
            collected: Vec::new(),
        }
    }
}

impl<S> CollectingVisitor<S> {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected polygons.
    pub fn into_polygons(self) -> Vec<Polygon<S>> {
        self.collected
    }

    /// Returns a reference to the collected polygons.
    pub fn polygons(&self) -> &[Polygon<S>] {
        &self.collected
    }
}

impl<S: Clone> BspVisitor<S> for CollectingVisitor<S> {
    fn visit(&mut self, polygons: &[Polygon<S>]) {
        self.collected.extend(polygons.iter().cloned());
    }
}

/// A visitor that calls a closure for each polygon group.
pub struct FnVisitor<F> {
    func: F,
}

impl<F> FnVisitor<F> {
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<S, F> BspVisitor<S> for FnVisitor<F>
where
    F: FnMut(&[Polygon<S>]),
{
    fn visit(&mut self, polygons: &[Polygon<S>]) {
        (self.func)(polygons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Point, Vector};
    use crate::Vertex;

    fn make_triangle(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Polygon<u8> {
        Polygon::new(
            vec![
                Vertex::new(Point::from(a), Vector::z()),
                Vertex::new(Point::from(b), Vector::z()),
                Vertex::new(Point::from(c), Vector::z()),
            ],
            Some(1),
        )
    }

    #[test]
    fn collecting_visitor_empty() {
        let visitor: CollectingVisitor<u8> = CollectingVisitor::new();
        assert!(visitor.polygons().is_empty());
    }

    #[test]
    fn collecting_visitor_collects() {
        let mut visitor = CollectingVisitor::new();
        let poly1 = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let poly2 = make_triangle([0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]);

        visitor.visit(&[poly1.clone()]);
        visitor.visit(&[poly2.clone()]);

        let collected = visitor.into_polygons();
        assert_eq!(collected, vec![poly1, poly2]);
    }

    #[test]
    fn fn_visitor_calls_closure() {
        let mut count = 0;
        {
            let mut visitor = FnVisitor::new(|polys: &[Polygon<u8>]| {
                count += polys.len();
            });

            let poly = make_triangle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
            visitor.visit(&[poly.clone(), poly]);
        }
        assert_eq!(count, 2);
    }
}
