//! Red-cyan anaglyph conversion of a single image.

use std::path::Path;

use image::RgbImage;

use crate::channels::{extract_plane, merge_planes, shift_horizontal, Channel};
use crate::error::{Error, Result};
use crate::image::{load_image, save_image, DEFAULT_JPEG_QUALITY};

/// Default horizontal parallax in pixels.
pub const DEFAULT_OFFSET: i64 = 10;

/// Configuration for anaglyph conversion.
#[derive(Debug, Clone)]
pub struct Config {
    /// Horizontal shift applied to the red channel. Positive values shift left.
    pub offset: i64,

    /// Output JPEG quality (1-100).
    pub jpeg_quality: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl Config {
    /// Validate the configuration. The offset accepts any value.
    ///
    /// # Errors
    ///
    /// Returns an error if the JPEG quality is outside 1-100.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidParameter {
                name: "jpeg_quality".to_string(),
                reason: "must be between 1 and 100".to_string(),
            });
        }

        Ok(())
    }
}

/// Build the anaglyph of an in-memory image.
///
/// The red channel is taken from a copy of `img` shifted left by `offset`
/// pixels with wrap-around; green and blue come from `img` unchanged. The
/// result always has the dimensions of `img`.
///
/// # Errors
///
/// Returns [`Error::PlaneMismatch`] if the planes disagree in size, which the
/// shift never causes.
pub fn render(img: &RgbImage, offset: i64) -> Result<RgbImage> {
    let left = shift_horizontal(img, offset);

    let red = extract_plane(&left, Channel::Red);
    let green = extract_plane(img, Channel::Green);
    let blue = extract_plane(img, Channel::Blue);

    merge_planes(&red, &green, &blue)
}

/// Converts image files into red-cyan anaglyphs.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Create a new converter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this converter runs with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Convert the image at `input_path` and write the anaglyph to
    /// `output_path`. The output format follows the extension of
    /// `output_path`.
    ///
    /// Failures are logged before being returned so that batch callers can
    /// simply move on to the next file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImageLoad`] or [`Error::ImageSave`].
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let img = load_image(input_path).inspect_err(|err| {
            tracing::error!("Error opening {}: {}", input_path.display(), source_of(err));
        })?;

        tracing::debug!(
            "Rendering {} with offset {}",
            input_path.display(),
            self.config.offset
        );
        let anaglyph = render(&img, self.config.offset)?;
        drop(img);

        save_image(&anaglyph, output_path, self.config.jpeg_quality).inspect_err(|err| {
            tracing::error!("Error saving {}: {}", output_path.display(), source_of(err));
        })?;

        tracing::info!("Anaglyph saved as {}", output_path.display());
        Ok(())
    }
}

/// Convert a single file with the given offset and default JPEG quality.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] or [`Error::ImageSave`].
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    offset: i64,
) -> Result<()> {
    let converter = Converter {
        config: Config {
            offset,
            ..Config::default()
        },
    };
    converter.convert(input_path, output_path)
}

/// The underlying cause of an I/O error, without the path prefix.
fn source_of(err: &Error) -> String {
    match err {
        Error::ImageLoad { source, .. } | Error::ImageSave { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
