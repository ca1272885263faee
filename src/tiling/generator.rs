//! Tiling construction: validation, family dispatch, and boundary clipping

use crate::geometry::{Bounds, Polygon};
use crate::io::configuration::MAX_CELLS_PER_AXIS;
use crate::io::error::{Result, invalid_parameter};
use crate::tiling::family::Family;
use crate::tiling::{hexagonal, square, triangular};

/// Parameters describing one tiling to generate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilingConfig {
    /// Tessellation family
    pub family: Family,
    /// Cell edge length (square and triangular) or circumradius (hexagonal)
    pub scale: f64,
    /// Width of the covered region in plane units
    pub width: f64,
    /// Height of the covered region in plane units
    pub height: f64,
}

impl TilingConfig {
    /// Validate the parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `scale`, `width`, or `height` is not
    /// a finite positive number, or when the cell count along either axis
    /// would exceed [`MAX_CELLS_PER_AXIS`].
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"must be a finite positive number",
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &"must be a finite positive number",
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &"must be a finite positive number",
            ));
        }

        let max_axis_extent = f64::from(MAX_CELLS_PER_AXIS) * self.scale;
        if self.width > max_axis_extent || self.height > max_axis_extent {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &format!("yields more than {MAX_CELLS_PER_AXIS} cells along one axis"),
            ));
        }
        Ok(())
    }
}

/// A tessellation of a bounded rectangular region
///
/// Cells cover the bounds with no gaps and no overlaps, in deterministic
/// row-major order. Constructed once per invocation and immutable afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Tiling {
    /// Family the cells belong to
    pub family: Family,
    /// Scale the cells were generated at
    pub scale: f64,
    /// Region the cells cover
    pub bounds: Bounds,
    /// Cell outlines in row-major order
    pub cells: Vec<Polygon>,
}

impl Tiling {
    /// Sum of all cell areas
    ///
    /// For a valid tiling this equals the bounds area up to floating-point
    /// accumulation error.
    pub fn covered_area(&self) -> f64 {
        self.cells.iter().map(Polygon::area).sum()
    }
}

/// Generate a tiling from validated parameters
///
/// Dispatches to the pure per-family generator, then clips every candidate
/// cell to the bounds with the shared polygon-rectangle intersection and
/// discards empty remnants. Output ordering and vertex coordinates are fully
/// deterministic.
///
/// # Errors
///
/// Returns `InvalidParameter` when [`TilingConfig::validate`] rejects the
/// parameters.
pub fn generate(config: &TilingConfig) -> Result<Tiling> {
    config.validate()?;

    let candidates = match config.family {
        Family::Triangular => triangular::cells(config.scale, config.width, config.height),
        Family::Square => square::cells(config.scale, config.width, config.height),
        Family::Hexagonal => hexagonal::cells(config.scale, config.width, config.height),
    };

    let bounds = Bounds::new(config.width, config.height);
    let cells = candidates
        .iter()
        .filter_map(|cell| bounds.clip(cell))
        .collect();

    Ok(Tiling {
        family: config.family,
        scale: config.scale,
        bounds,
        cells,
    })
}
