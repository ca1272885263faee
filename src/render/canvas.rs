//! Rendering target owning the pixel buffer
//!
//! The canvas maps plane coordinates to pixel coordinates through a fixed
//! pixels-per-unit factor. It is created with the background already filled,
//! painted once by stroking cell outlines, and then turned into an image for
//! export. It holds no geometry and no cross-invocation state.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::geometry::{Bounds, Point, Polygon};
use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::render::RenderOptions;
use crate::render::stroke;

/// A fixed-size pixel grid with stroke styling
pub struct Canvas {
    image: RgbImage,
    pixels_per_unit: f64,
    stroke_color: Rgb<u8>,
    stroke_half_width: f64,
}

impl Canvas {
    /// Create a canvas covering the given bounds with the background filled
    ///
    /// Pixel dimensions are the bounds extents scaled by pixels-per-unit and
    /// rounded to the nearest pixel.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the options fail validation or either
    /// pixel dimension rounds to zero or exceeds [`MAX_CANVAS_DIMENSION`].
    pub fn new(options: &RenderOptions, bounds: Bounds) -> Result<Self> {
        options.validate()?;
        let width = pixel_extent("width", bounds.width, options.pixels_per_unit)?;
        let height = pixel_extent("height", bounds.height, options.pixels_per_unit)?;

        Ok(Self {
            image: ImageBuffer::from_pixel(width, height, options.background),
            pixels_per_unit: options.pixels_per_unit,
            stroke_color: options.stroke,
            stroke_half_width: options.stroke_width / 2.0,
        })
    }

    /// Stroke a polygon outline, including its closing edge
    pub fn stroke_polygon(&mut self, polygon: &Polygon) {
        for (from, to) in polygon.edges() {
            let from_px = self.to_pixel(from);
            let to_px = self.to_pixel(to);
            stroke::draw_segment(
                &mut self.image,
                from_px,
                to_px,
                self.stroke_half_width,
                self.stroke_color,
            );
        }
    }

    /// Canvas dimensions in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Borrow the pixel buffer
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas, yielding the painted pixel buffer
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn to_pixel(&self, point: Point) -> Point {
        Point::new(
            point.x * self.pixels_per_unit,
            point.y * self.pixels_per_unit,
        )
    }
}

fn pixel_extent(parameter: &'static str, units: f64, pixels_per_unit: f64) -> Result<u32> {
    let pixels = (units * pixels_per_unit).round();
    if pixels < 1.0 {
        return Err(invalid_parameter(
            parameter,
            &units,
            &"canvas dimension rounds to zero pixels",
        ));
    }
    if pixels > f64::from(MAX_CANVAS_DIMENSION) {
        return Err(invalid_parameter(
            parameter,
            &units,
            &format!("canvas dimension exceeds {MAX_CANVAS_DIMENSION} pixels"),
        ));
    }
    Ok(pixels as u32)
}
