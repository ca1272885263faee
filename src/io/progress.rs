//! Render progress reporting

use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static RENDER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} cells")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for a single render pass
///
/// One bar advancing per stroked cell, finishing with the output path and
/// elapsed time. Suppressed entirely when the CLI runs with `--quiet`.
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Create a progress bar over the given number of cells
    pub fn new(total_cells: usize) -> Self {
        let bar = ProgressBar::new(total_cells as u64);
        bar.set_style(RENDER_STYLE.clone());
        bar.set_message("Rendering");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Record one stroked cell
    pub fn cell_done(&self) {
        self.bar.inc(1);
    }

    /// Finish with a summary of where the image was written
    pub fn finish(&self, output_path: &Path, elapsed: Duration) {
        self.bar.finish_with_message(format!(
            "Wrote {} in {:.2}s",
            output_path.display(),
            elapsed.as_secs_f64()
        ));
    }
}
