//! Axis-aligned square grid cells

use crate::geometry::{Point, Polygon};

/// Generate unclipped square cells of side `scale` covering the region
///
/// Cells are emitted row-major from the origin, left to right then top to
/// bottom, with vertices ordered top-left, top-right, bottom-right,
/// bottom-left. Cells in the final row and column may extend past the bounds
/// and are clipped by the caller.
pub fn cells(scale: f64, width: f64, height: f64) -> Vec<Polygon> {
    let cols = (width / scale).ceil() as usize;
    let rows = (height / scale).ceil() as usize;

    let mut cells = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let x = col as f64 * scale;
            let y = row as f64 * scale;
            cells.push(Polygon::new(vec![
                Point::new(x, y),
                Point::new(x + scale, y),
                Point::new(x + scale, y + scale),
                Point::new(x, y + scale),
            ]));
        }
    }
    cells
}
