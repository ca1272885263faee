//! Deterministic tessellation pattern generation for printable coloring pages
//!
//! The crate computes a repeating geometric tiling (triangular, square, or
//! hexagonal) that exactly covers a bounded plane region, then rasterizes the
//! cell outlines onto a high-resolution bitmap suitable for print.

#![forbid(unsafe_code)]

/// Plane primitives: points, closed polygons, and rectangle clipping
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Rasterization of tilings onto a pixel canvas
pub mod render;
/// Tiling family generators and dispatch
pub mod tiling;

pub use io::error::{Result, TessellationError};
