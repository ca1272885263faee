//! Tessellation family selection

use std::fmt;

/// The supported tessellation families
///
/// Each family dispatches to a pure generation function producing the same
/// polygon output type; there is no per-family cell representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Family {
    /// Squares split along alternating diagonals into triangle pairs
    Triangular,
    /// Axis-aligned square grid
    Square,
    /// Pointy-top hexagons in offset rows
    Hexagonal,
}

impl Family {
    /// Lowercase name as accepted on the command line
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Triangular => "triangular",
            Self::Square => "square",
            Self::Hexagonal => "hexagonal",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
