//! Rasterization of tilings onto a pixel canvas
//!
//! The renderer fills a background and strokes every cell outline once.
//! Strokes paint solid pixels by distance to the edge segment, so restroking
//! a shared edge is idempotent and shared edges stay visually identical to a
//! single stroke.

use image::{Rgb, RgbImage};

use crate::io::error::{Result, invalid_parameter};
use crate::render::color::{BLACK, WHITE};
use crate::tiling::Tiling;

/// Rendering target and coordinate mapping
pub mod canvas;
/// Color constants and hex parsing
pub mod color;
/// Solid thick-line rasterization
pub mod stroke;

pub use canvas::Canvas;

/// Rendering configuration for one invocation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Scale factor from plane units to pixels
    pub pixels_per_unit: f64,
    /// Stroke width in pixels
    pub stroke_width: f64,
    /// Background fill color
    pub background: Rgb<u8>,
    /// Cell outline color
    pub stroke: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pixels_per_unit: crate::io::configuration::DEFAULT_PIXELS_PER_UNIT,
            stroke_width: crate::io::configuration::DEFAULT_STROKE_WIDTH,
            background: WHITE,
            stroke: BLACK,
        }
    }
}

impl RenderOptions {
    /// Validate the options
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `pixels_per_unit` or `stroke_width`
    /// is not a finite positive number.
    pub fn validate(&self) -> Result<()> {
        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            return Err(invalid_parameter(
                "pixels-per-unit",
                &self.pixels_per_unit,
                &"must be a finite positive number",
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(invalid_parameter(
                "line-width",
                &self.stroke_width,
                &"must be a finite positive number",
            ));
        }
        Ok(())
    }
}

/// Render a tiling to a pixel buffer
///
/// Convenience wrapper over [`Canvas`] that strokes every cell in order.
///
/// # Errors
///
/// Returns `InvalidParameter` when the options are invalid or the canvas
/// dimensions fall outside the supported range.
pub fn render(tiling: &Tiling, options: &RenderOptions) -> Result<RgbImage> {
    let mut canvas = Canvas::new(options, tiling.bounds)?;
    for cell in &tiling.cells {
        canvas.stroke_polygon(cell);
    }
    Ok(canvas.into_image())
}
