//! Custom error types for anaglyph.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the anaglyph library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A directory input was paired with an output that is not a directory.
    #[error("when input is a directory, output must also be a directory: {path}")]
    OutputNotDirectory { path: PathBuf },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to list the input directory.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Channel planes passed to a merge do not share the same dimensions.
    #[error("channel plane size mismatch: expected {expected:?}, got {actual:?}")]
    PlaneMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl Error {
    /// Whether this error comes from bad command-line input rather than image I/O.
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::OutputNotDirectory { .. } | Self::InvalidParameter { .. }
        )
    }
}

/// Result type alias for anaglyph operations.
pub type Result<T> = std::result::Result<T, Error>;
