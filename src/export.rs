use std::path::Path;

use anyhow::{Context, Result};

use crate::canvas::Canvas;

/// Writes the canvas to an image file.
///
/// The encoding is picked from the output extension by the image crate
/// (png, jpg, bmp).
pub fn save(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image::save_buffer(
        path,
        canvas.pixels(),
        canvas.width(),
        canvas.height(),
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("failed to save image to {:?}", path))
}
