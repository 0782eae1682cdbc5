//! Channel-level operations on RGB images: circular shifts, plane extraction
//! and plane merging.

use image::{GrayImage, Luma, Pixel, Rgb, RgbImage};

use crate::error::{Error, Result};

/// One color channel of an RGB image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Index of this channel within an RGB pixel.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }
}

/// Shift every row of `img` left by `offset` pixels with wrap-around.
///
/// Output column `x` holds input column `(x + offset) mod width`, so a
/// negative offset shifts right and any offset is equivalent to
/// `offset mod width`. Rows never move vertically.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn shift_horizontal(img: &RgbImage, offset: i64) -> RgbImage {
    let mut shifted = img.clone();
    let width = img.width();
    if width == 0 || img.height() == 0 {
        return shifted;
    }

    // rem_euclid keeps the shift in 0..width, which fits in u32.
    let shift = offset.rem_euclid(i64::from(width)) as usize;
    if shift == 0 {
        return shifted;
    }

    let channels = usize::from(Rgb::<u8>::CHANNEL_COUNT);
    let row_len = width as usize * channels;
    for row in shifted.chunks_exact_mut(row_len) {
        row.rotate_left(shift * channels);
    }

    shifted
}

/// Extract a single channel of `img` as a grayscale plane.
#[must_use]
pub fn extract_plane(img: &RgbImage, channel: Channel) -> GrayImage {
    let idx = channel.index();
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([img.get_pixel(x, y)[idx]])
    })
}

/// Combine three planes into an RGB image.
///
/// # Errors
///
/// Returns [`Error::PlaneMismatch`] if the planes differ in size.
pub fn merge_planes(red: &GrayImage, green: &GrayImage, blue: &GrayImage) -> Result<RgbImage> {
    let expected = red.dimensions();
    for plane in [green, blue] {
        if plane.dimensions() != expected {
            return Err(Error::PlaneMismatch {
                expected,
                actual: plane.dimensions(),
            });
        }
    }

    Ok(RgbImage::from_fn(expected.0, expected.1, |x, y| {
        Rgb([
            red.get_pixel(x, y)[0],
            green.get_pixel(x, y)[0],
            blue.get_pixel(x, y)[0],
        ])
    }))
}
