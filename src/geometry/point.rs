//! Real-valued plane coordinates

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, increasing rightward
    pub x: f64,
    /// Vertical coordinate, increasing downward (raster convention)
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
