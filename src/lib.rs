//! # anaglyph
//!
//! Turn ordinary photographs into red-cyan anaglyphs.
//!
//! The red channel is shifted horizontally with wrap-around while green and
//! blue stay in place. Viewed through red-cyan glasses, the offset between
//! the two views reads as stereo parallax. There is no depth estimation: the
//! whole image sits at a single apparent depth.
//!
//! ## Example
//!
//! ```no_run
//! use anaglyph::{Config, Converter};
//!
//! # fn main() -> anaglyph::Result<()> {
//! let converter = Converter::new(Config::default())?;
//! converter.convert("photo.jpg", "photo_anaglyph.jpg")?;
//!
//! anaglyph::convert_directory("holiday", "holiday-3d", &converter)?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod channels;
pub mod command;
pub mod converter;
pub mod error;
pub mod image;

pub use batch::convert_directory;
pub use command::{Command, Mode};
pub use converter::{convert, render, Config, Converter, DEFAULT_OFFSET};
pub use error::{Error, Result};
