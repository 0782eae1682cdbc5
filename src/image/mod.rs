//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::save_image;

/// Default JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;
