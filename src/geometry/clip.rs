//! Polygon-rectangle intersection
//!
//! Implements Sutherland-Hodgman clipping against an axis-aligned rectangle
//! anchored at the origin. Every tiling family reuses this single routine for
//! boundary cells, which keeps the covering invariant uniform across
//! families.

use crate::geometry::point::Point;
use crate::geometry::polygon::Polygon;

// Tolerances scale with the polygon's own extent, so clipping behaves the
// same across plane-unit magnitudes. Vertices closer than
// `extent * RELATIVE_EPSILON` merge; remnants below the squared equivalent
// of that length are treated as empty.
const RELATIVE_EPSILON: f64 = 1e-9;

/// Bounded rectangular region `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Horizontal extent in plane units
    pub width: f64,
    /// Vertical extent in plane units
    pub height: f64,
}

impl Bounds {
    /// Create bounds from their extents
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check whether a point lies within the bounds (boundary inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Area of the bounded region
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Intersect a polygon with the bounds
    ///
    /// Returns `None` when the intersection is empty or degenerate (fewer
    /// than three distinct vertices, or effectively zero area relative to
    /// the polygon's extent). Vertex order is preserved, so clipping is
    /// deterministic.
    pub fn clip(&self, polygon: &Polygon) -> Option<Polygon> {
        let planes = [
            HalfPlane::MinX,
            HalfPlane::MaxX(self.width),
            HalfPlane::MinY,
            HalfPlane::MaxY(self.height),
        ];

        let mut vertices = polygon.vertices().to_vec();
        for plane in planes {
            vertices = clip_half_plane(&vertices, plane);
            if vertices.is_empty() {
                return None;
            }
        }

        let merge_tolerance = extent(polygon) * RELATIVE_EPSILON;
        let area_tolerance = merge_tolerance * merge_tolerance;
        let clipped = Polygon::new(dedup_consecutive(vertices, merge_tolerance));
        (clipped.vertex_count() >= 3 && clipped.area() > area_tolerance).then_some(clipped)
    }
}

/// One rectangle boundary, keeping the half-plane on its inner side
#[derive(Debug, Clone, Copy)]
enum HalfPlane {
    MinX,
    MaxX(f64),
    MinY,
    MaxY(f64),
}

impl HalfPlane {
    fn contains(self, point: Point) -> bool {
        match self {
            Self::MinX => point.x >= 0.0,
            Self::MaxX(width) => point.x <= width,
            Self::MinY => point.y >= 0.0,
            Self::MaxY(height) => point.y <= height,
        }
    }

    // Callers guarantee the segment crosses the boundary, so the
    // interpolation denominator is never zero
    fn intersect(self, from: Point, to: Point) -> Point {
        match self {
            Self::MinX => cross_vertical(from, to, 0.0),
            Self::MaxX(width) => cross_vertical(from, to, width),
            Self::MinY => cross_horizontal(from, to, 0.0),
            Self::MaxY(height) => cross_horizontal(from, to, height),
        }
    }
}

fn cross_vertical(from: Point, to: Point, x: f64) -> Point {
    let t = (x - from.x) / (to.x - from.x);
    Point::new(x, (to.y - from.y).mul_add(t, from.y))
}

fn cross_horizontal(from: Point, to: Point, y: f64) -> Point {
    let t = (y - from.y) / (to.y - from.y);
    Point::new((to.x - from.x).mul_add(t, from.x), y)
}

fn clip_half_plane(vertices: &[Point], plane: HalfPlane) -> Vec<Point> {
    let mut output = Vec::with_capacity(vertices.len() + 4);
    let Some(&last) = vertices.last() else {
        return output;
    };

    let mut previous = last;
    for &current in vertices {
        if plane.contains(current) {
            if !plane.contains(previous) {
                output.push(plane.intersect(previous, current));
            }
            output.push(current);
        } else if plane.contains(previous) {
            output.push(plane.intersect(previous, current));
        }
        previous = current;
    }
    output
}

// Largest side of the polygon's bounding box, used to size tolerances
fn extent(polygon: &Polygon) -> f64 {
    let (min_x, max_x, min_y, max_y) = polygon.vertices().iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(min_x, max_x, min_y, max_y), vertex| {
            (
                min_x.min(vertex.x),
                max_x.max(vertex.x),
                min_y.min(vertex.y),
                max_y.max(vertex.y),
            )
        },
    );
    (max_x - min_x).max(max_y - min_y).max(0.0)
}

// Clipping can emit coincident vertices where a polygon corner touches a
// boundary; merge them so downstream consumers see clean outlines
fn dedup_consecutive(vertices: Vec<Point>, merge_tolerance: f64) -> Vec<Point> {
    let mut result: Vec<Point> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        if result
            .last()
            .is_none_or(|prev| prev.distance_to(vertex) > merge_tolerance)
        {
            result.push(vertex);
        }
    }

    while result.len() > 1 {
        let closes_on_itself = match (result.first().copied(), result.last().copied()) {
            (Some(first), Some(tail)) => first.distance_to(tail) <= merge_tolerance,
            _ => false,
        };
        if closes_on_itself {
            result.pop();
        } else {
            break;
        }
    }
    result
}
