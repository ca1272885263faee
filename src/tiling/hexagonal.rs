//! Pointy-top hexagonal cells in offset rows
//!
//! Hexagons of circumradius `scale` are laid out with columns spaced
//! `sqrt(3) * scale` apart and rows spaced `1.5 * scale` apart; every other
//! row is offset horizontally by half a column so adjacent hexagons share
//! edges exactly. The first row is centered on `y = 0` and one extra column
//! is generated on each side, so boundary coverage is completed by clipping.

use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};

use crate::geometry::{Point, Polygon};

/// Generate unclipped hexagon cells covering the region
///
/// Emitted row-major by center position, left to right then top to bottom.
/// Candidates that end up entirely outside the bounds are discarded by the
/// caller's clipping pass.
pub fn cells(scale: f64, width: f64, height: f64) -> Vec<Polygon> {
    let col_width = 3.0_f64.sqrt() * scale;
    let row_height = 1.5 * scale;

    let rows = (height / row_height).ceil() as i64 + 1;
    let cols = (width / col_width).ceil() as i64 + 1;

    let mut cells = Vec::with_capacity((rows * (cols + 1)) as usize);
    for row in 0..rows {
        let offset = if row % 2 == 0 { 0.0 } else { 0.5 };
        let center_y = row as f64 * row_height;
        for col in -1..cols {
            let center_x = (col as f64 + offset) * col_width;
            cells.push(hexagon(center_x, center_y, scale));
        }
    }
    cells
}

// Vertices counterclockwise from 30 degrees, giving a pointy-top orientation
fn hexagon(center_x: f64, center_y: f64, circumradius: f64) -> Polygon {
    let vertices = (0..6)
        .map(|step| {
            let angle = (step as f64).mul_add(FRAC_PI_3, FRAC_PI_6);
            Point::new(
                circumradius.mul_add(angle.cos(), center_x),
                circumradius.mul_add(angle.sin(), center_y),
            )
        })
        .collect();
    Polygon::new(vertices)
}
