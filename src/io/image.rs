//! Image export with parent directory creation

use std::path::Path;

use image::RgbImage;

use crate::io::error::{Result, TessellationError};

/// Save the painted canvas to disk
///
/// Missing parent directories are created first. The encoder is chosen from
/// the output extension; `.png` is the expected print target.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_canvas_as_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TessellationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .save(output_path)
        .map_err(|e| TessellationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
