//! Image saving utilities.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageError, ImageFormat, RgbImage};

use crate::error::{Error, Result};

/// Save an RGB image, inferring the format from the file extension.
///
/// JPEG output is encoded with `quality` (1-100); the value is ignored for
/// every other format.
///
/// # Errors
///
/// Returns [`Error::ImageSave`] if the extension is missing or unsupported,
/// or if the file cannot be written or flushed.
pub fn save_image<P: AsRef<Path>>(img: &RgbImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();

    let map_err = |source: ImageError| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    };

    let format = ImageFormat::from_path(path).map_err(map_err)?;

    let file = File::create(path).map_err(|e| map_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);

    if format == ImageFormat::Jpeg {
        let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
        img.write_with_encoder(encoder).map_err(map_err)?;
    } else {
        img.write_to(&mut writer, format).map_err(map_err)?;
    }

    // Dropping a BufWriter discards flush errors.
    writer
        .flush()
        .map_err(|e| map_err(ImageError::IoError(e)))?;

    Ok(())
}
