//! Closed polygon outlines
//!
//! A polygon is an ordered sequence of vertices; the last vertex is
//! implicitly connected back to the first. Generators produce convex cells
//! with at least three vertices and no self-intersection.

use crate::geometry::point::Point;

/// One tessellation cell's outline
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from an ordered vertex sequence
    pub const fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Vertices in order, without the implicit closing duplicate
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices (equal to the number of edges)
    pub const fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over directed edges, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let wrapped = self
            .vertices
            .iter()
            .copied()
            .cycle()
            .skip(1)
            .take(self.vertices.len());
        self.vertices.iter().copied().zip(wrapped)
    }

    /// Absolute enclosed area via the shoelace formula
    ///
    /// Degenerate polygons (fewer than three vertices) have zero area.
    pub fn area(&self) -> f64 {
        let twice_signed: f64 = self
            .edges()
            .map(|(a, b)| a.x.mul_add(b.y, -(b.x * a.y)))
            .sum();
        twice_signed.abs() / 2.0
    }
}
