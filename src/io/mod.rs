//! Input/output operations
//!
//! This module contains the outer surface of the tool:
//! - Command-line interface and invocation orchestration
//! - Defaults and safety limits
//! - Error types
//! - Image export and progress reporting

/// Command-line interface and invocation orchestration
pub mod cli;
/// Defaults and safety limits
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Image export
pub mod image;
/// Render progress reporting
pub mod progress;
