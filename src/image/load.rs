//! Image loading utilities.

use std::path::Path;

use image::{ImageError, ImageReader, RgbImage};

use crate::error::{Error, Result};

/// Load an image from disk as 8-bit RGB.
///
/// The format is detected from the file contents, falling back to the
/// extension. Alpha is discarded and grayscale, palette or high bit depth
/// images are converted to three 8-bit channels.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let map_err = |source: ImageError| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| map_err(ImageError::IoError(e)))?
        .decode()
        .map_err(map_err)?;

    tracing::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(img.to_rgb8())
}
