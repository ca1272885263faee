//! Solid thick-line rasterization
//!
//! Paints every pixel whose center lies within half the stroke width of the
//! segment, giving round caps at segment ends. Painting is idempotent, so
//! edges shared between adjacent cells may be stroked once per cell without
//! any visible difference from a single stroke.

use image::{Rgb, RgbImage};

use crate::geometry::Point;

/// Stroke one segment in pixel coordinates
///
/// Pixels outside the image are skipped; segments entirely outside paint
/// nothing.
pub fn draw_segment(
    image: &mut RgbImage,
    from: Point,
    to: Point,
    half_width: f64,
    color: Rgb<u8>,
) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let min_x = (from.x.min(to.x) - half_width).floor().max(0.0) as u32;
    let min_y = (from.y.min(to.y) - half_width).floor().max(0.0) as u32;
    let max_x = ((from.x.max(to.x) + half_width).ceil().max(0.0) as u32).min(width - 1);
    let max_y = ((from.y.max(to.y) + half_width).ceil().max(0.0) as u32).min(height - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if distance_to_segment(center, from, to) <= half_width {
                image.put_pixel(x, y, color);
            }
        }
    }
}

// Distance from a point to the closest point on a segment
fn distance_to_segment(point: Point, from: Point, to: Point) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length_squared = dx.mul_add(dx, dy * dy);
    if length_squared <= f64::EPSILON {
        return point.distance_to(from);
    }

    let along = (point.x - from.x).mul_add(dx, (point.y - from.y) * dy) / length_squared;
    let t = along.clamp(0.0, 1.0);
    let closest = Point::new(t.mul_add(dx, from.x), t.mul_add(dy, from.y));
    point.distance_to(closest)
}
