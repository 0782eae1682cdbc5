//! `anaglyph` CLI - Create red-cyan anaglyphs from images or directories of images.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anaglyph::image::DEFAULT_JPEG_QUALITY;
use anaglyph::{Command, Config, Error, DEFAULT_OFFSET};

/// Create red-cyan anaglyph images by shifting the red channel horizontally.
///
/// If INPUT is a directory, OUTPUT must be an existing directory and every
/// .jpg/.jpeg/.png/.bmp/.tiff/.tif file in INPUT is converted.
#[derive(Parser, Debug)]
#[command(name = "anaglyph")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image or directory of images.
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output image, or output directory when INPUT is a directory.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Horizontal shift of the red channel in pixels. Negative values shift the other way.
    #[arg(
        value_name = "OFFSET",
        default_value_t = DEFAULT_OFFSET,
        allow_negative_numbers = true
    )]
    offset: i64,

    /// Output JPEG quality (1-100).
    #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY, value_name = "INT")]
    quality: u8,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            print!("{err}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("anaglyph={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stdout().is_terminal())
                .with_writer(std::io::stdout),
        )
        .init();

    if let Err(err) = run(args) {
        // Per-file load/save failures were already logged by the converter.
        let reported = matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ImageLoad { .. } | Error::ImageSave { .. })
        );
        if !reported {
            tracing::error!("{err:#}");
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<()> {
    let config = Config {
        offset: args.offset,
        jpeg_quality: args.quality,
    };

    let command =
        Command::resolve(args.input, args.output, config).context("Invalid arguments")?;
    command.run().context("Conversion failed")?;

    Ok(())
}
