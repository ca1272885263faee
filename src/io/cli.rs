//! Command-line interface for generating one tessellation image

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use crate::io::configuration::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_PIXELS_PER_UNIT, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_canvas_as_png;
use crate::io::progress::RenderProgress;
use crate::render::color::parse_hex_color;
use crate::render::{Canvas, RenderOptions};
use crate::tiling::{Family, TilingConfig, generate};

#[derive(Parser)]
#[command(name = "tessellate")]
#[command(
    author,
    version,
    about = "Generate printable tessellation patterns for coloring books"
)]
/// Command-line arguments for the tessellation tool
pub struct Cli {
    /// Tessellation family to generate
    #[arg(short, long, value_enum)]
    pub family: Family,

    /// Cell edge length (or hexagon circumradius) in plane units
    #[arg(short, long)]
    pub scale: f64,

    /// Width of the covered region in plane units
    #[arg(short = 'w', long)]
    pub width: u32,

    /// Height of the covered region in plane units
    #[arg(short = 'H', long)]
    pub height: u32,

    /// Path of the output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Raster resolution in pixels per plane unit
    #[arg(long, default_value_t = DEFAULT_PIXELS_PER_UNIT)]
    pub pixels_per_unit: f64,

    /// Stroke width in pixels
    #[arg(short = 'l', long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub line_width: f64,

    /// Stroke color as an #RRGGBB hex string
    #[arg(long, default_value = DEFAULT_STROKE_COLOR)]
    pub stroke_color: String,

    /// Background color as an #RRGGBB hex string
    #[arg(long, default_value = DEFAULT_BACKGROUND_COLOR)]
    pub background_color: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one generate-render-export invocation
pub struct PatternWriter {
    cli: Cli,
}

impl PatternWriter {
    /// Create a pattern writer from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the tiling, render it, and write the output image
    ///
    /// Either a complete valid image is written or nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for rejected parameters or colors, and
    /// `ImageExport`/`FileSystem` when the output path is not writable.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();

        let stroke = parse_hex_color("stroke-color", &self.cli.stroke_color)?;
        let background = parse_hex_color("background-color", &self.cli.background_color)?;

        let config = TilingConfig {
            family: self.cli.family,
            scale: self.cli.scale,
            width: f64::from(self.cli.width),
            height: f64::from(self.cli.height),
        };
        let tiling = generate(&config)?;

        let options = RenderOptions {
            pixels_per_unit: self.cli.pixels_per_unit,
            stroke_width: self.cli.line_width,
            background,
            stroke,
        };
        let mut canvas = Canvas::new(&options, tiling.bounds)?;

        let progress = self
            .cli
            .should_show_progress()
            .then(|| RenderProgress::new(tiling.cells.len()));

        for cell in &tiling.cells {
            canvas.stroke_polygon(cell);
            if let Some(ref bar) = progress {
                bar.cell_done();
            }
        }

        export_canvas_as_png(canvas.image(), &self.cli.output)?;

        if let Some(ref bar) = progress {
            bar.finish(&self.cli.output, start_time.elapsed());
        }

        Ok(())
    }
}
