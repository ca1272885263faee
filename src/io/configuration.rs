//! Defaults and safety limits for generation and rendering

// Default values for configurable parameters
/// Default raster resolution in pixels per plane unit
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 8.0;

/// Default stroke width in pixels
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Default stroke color as a hex string
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

/// Default background color as a hex string
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

// Safety limits to prevent excessive memory allocation
/// Maximum allowed canvas dimension in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 10_000;

/// Maximum number of cells generated along one axis
pub const MAX_CELLS_PER_AXIS: u32 = 4_096;
