//! Plane geometry for tessellation cells
//!
//! This module contains the geometric building blocks:
//! - Real-valued plane points
//! - Closed polygons with edge iteration and area computation
//! - Rectangle clipping shared by all tiling families

/// Polygon-rectangle intersection
pub mod clip;
/// Plane coordinates
pub mod point;
/// Closed polygon outlines
pub mod polygon;

pub use clip::Bounds;
pub use point::Point;
pub use polygon::Polygon;
