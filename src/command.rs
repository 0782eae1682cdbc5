//! Resolution of raw input/output paths into a validated conversion command.

use std::path::PathBuf;

use crate::batch::convert_directory;
use crate::converter::{Config, Converter};
use crate::error::{Error, Result};

/// What a [`Command`] converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Convert one image file into one output file.
    SingleFile,
    /// Convert every supported image of a directory into an output directory.
    Batch,
}

/// A validated conversion request.
#[derive(Debug, Clone)]
pub struct Command {
    pub input: PathBuf,
    pub output: PathBuf,
    pub mode: Mode,
    converter: Converter,
}

impl Command {
    /// Decide the mode for `input` and `output` and validate `config`.
    ///
    /// A directory input requires `output` to be an existing directory. Any
    /// other input is treated as a single file; whether it can be read is
    /// only discovered when converting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutputNotDirectory`] on a directory/file mismatch or
    /// [`Error::InvalidParameter`] if the configuration is invalid.
    pub fn resolve(input: PathBuf, output: PathBuf, config: Config) -> Result<Self> {
        let converter = Converter::new(config)?;

        let mode = if input.is_dir() {
            if !output.is_dir() {
                return Err(Error::OutputNotDirectory { path: output });
            }
            Mode::Batch
        } else {
            Mode::SingleFile
        };

        tracing::debug!(
            "Resolved {:?} command: {} -> {}",
            mode,
            input.display(),
            output.display()
        );

        Ok(Self {
            input,
            output,
            mode,
            converter,
        })
    }

    /// The configuration conversions run with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        self.converter.config()
    }

    /// Execute the command.
    ///
    /// In batch mode, individual file failures are logged and do not make
    /// this return an error.
    ///
    /// # Errors
    ///
    /// In single-file mode, the load or save error of the conversion. In
    /// batch mode, only directory-level failures.
    pub fn run(&self) -> Result<()> {
        match self.mode {
            Mode::SingleFile => self.converter.convert(&self.input, &self.output),
            Mode::Batch => convert_directory(&self.input, &self.output, &self.converter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_input_is_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let command = Command::resolve(
            dir.path().join("photo.jpg"),
            dir.path().join("out.jpg"),
            Config::default(),
        )
        .unwrap();

        assert_eq!(command.mode, Mode::SingleFile);
        assert_eq!(command.config().offset, 10);
    }

    #[test]
    fn test_directory_pair_is_batch() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        let command = Command::resolve(
            input.path().to_path_buf(),
            output.path().to_path_buf(),
            Config::default(),
        )
        .unwrap();

        assert_eq!(command.mode, Mode::Batch);
    }

    #[test]
    fn test_directory_to_missing_output() {
        let input = tempfile::tempdir().unwrap();
        let output = input.path().join("does-not-exist");

        let err = Command::resolve(input.path().to_path_buf(), output.clone(), Config::default())
            .unwrap_err();

        assert!(err.is_argument_error());
        assert!(!output.exists());
    }

    #[test]
    fn test_directory_to_file_output() {
        let input = tempfile::tempdir().unwrap();
        let output = input.path().join("out.png");
        std::fs::write(&output, b"").unwrap();

        let err = Command::resolve(input.path().to_path_buf(), output, Config::default())
            .unwrap_err();

        assert!(matches!(err, Error::OutputNotDirectory { .. }));
    }

    #[test]
    fn test_single_file_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.jpg");
        let command =
            Command::resolve(dir.path().join("missing.jpg"), output.clone(), Config::default())
                .unwrap();

        assert!(matches!(command.run(), Err(Error::ImageLoad { .. })));
        assert!(!output.exists());
    }
}
