//! Triangular cells from diagonally split squares
//!
//! Each square cell of side `scale` is split along one diagonal into two
//! triangles. The diagonal direction alternates per row so that the pattern
//! reads as interlocking rather than striped: even rows split from top-left
//! to bottom-right, odd rows from top-right to bottom-left.

use crate::geometry::{Point, Polygon};

/// Generate unclipped triangle cells covering the region
///
/// Emitted row-major over the underlying square grid; each square yields its
/// upper triangle followed by its lower triangle.
pub fn cells(scale: f64, width: f64, height: f64) -> Vec<Polygon> {
    let cols = (width / scale).ceil() as usize;
    let rows = (height / scale).ceil() as usize;

    let mut cells = Vec::with_capacity(rows * cols * 2);
    for row in 0..rows {
        for col in 0..cols {
            let x = col as f64 * scale;
            let y = row as f64 * scale;

            let top_left = Point::new(x, y);
            let top_right = Point::new(x + scale, y);
            let bottom_right = Point::new(x + scale, y + scale);
            let bottom_left = Point::new(x, y + scale);

            if row % 2 == 0 {
                // Diagonal from top-left to bottom-right
                cells.push(Polygon::new(vec![top_left, top_right, bottom_right]));
                cells.push(Polygon::new(vec![top_left, bottom_right, bottom_left]));
            } else {
                // Diagonal from top-right to bottom-left
                cells.push(Polygon::new(vec![top_left, top_right, bottom_left]));
                cells.push(Polygon::new(vec![top_right, bottom_right, bottom_left]));
            }
        }
    }
    cells
}
