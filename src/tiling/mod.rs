//! Tiling generation
//!
//! This module contains the tiling-related functionality:
//! - Family selection as a tagged variant
//! - Pure per-family cell generators
//! - Dispatch, validation, and boundary clipping

/// Tiling family variants
pub mod family;
/// Parameter validation, dispatch, and clipping
pub mod generator;
/// Hexagonal cell layout
pub mod hexagonal;
/// Square grid cell layout
pub mod square;
/// Triangular cell layout
pub mod triangular;

pub use family::Family;
pub use generator::{Tiling, TilingConfig, generate};
