//! Directory sweeps: convert every supported image in a directory.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use crate::converter::Converter;
use crate::error::{Error, Result};

/// File extensions (lowercase, without the dot) picked up by a directory sweep.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif"];

/// Suffix inserted before the extension of every output file.
pub const OUTPUT_SUFFIX: &str = "_anaglyph";

/// Whether a file name carries one of [`SUPPORTED_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_supported(file_name: &OsStr) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Derive the output name for `file_name`: `photo.JPG` becomes
/// `photo_anaglyph.JPG`. The extension keeps its original case.
#[must_use]
pub fn output_file_name(file_name: &OsStr) -> OsString {
    let path = Path::new(file_name);
    let mut name = path.file_stem().unwrap_or(file_name).to_os_string();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Convert every supported image directly inside `input_dir`, writing the
/// results to `output_dir`.
///
/// Entries are visited in the order the filesystem lists them, which is
/// unspecified and differs between platforms. Subdirectories are not
/// descended into. A failed conversion is logged by the converter and the
/// sweep moves on; per-file outcomes are not collected.
///
/// # Errors
///
/// Returns an error only if `output_dir` cannot be created or `input_dir`
/// cannot be listed.
pub fn convert_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    input_dir: P,
    output_dir: Q,
    converter: &Converter,
) -> Result<()> {
    let input_dir = input_dir.as_ref();
    let output_dir = output_dir.as_ref();

    fs::create_dir_all(output_dir).map_err(|source| Error::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let entries = fs::read_dir(input_dir).map_err(|source| Error::ReadDir {
        path: input_dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::error!("Error reading entry in {}: {err}", input_dir.display());
                continue;
            }
        };

        let file_name = entry.file_name();
        if !is_supported(&file_name) {
            tracing::info!("Skipping non-image file: {}", file_name.to_string_lossy());
            continue;
        }

        let output_path = output_dir.join(output_file_name(&file_name));
        if let Err(err) = converter.convert(entry.path(), output_path) {
            tracing::debug!("Continuing after failed conversion: {err}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_image(path: &Path) {
        RgbImage::from_fn(12, 8, |x, y| Rgb([x as u8 * 20, y as u8 * 30, 90]))
            .save(path)
            .unwrap();
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_is_supported() {
        for name in ["a.jpg", "a.JPEG", "b.Png", "c.bmp", "d.TIFF", "e.tif"] {
            assert!(is_supported(OsStr::new(name)), "{name}");
        }
        for name in ["notes.txt", "png", ".png", "archive.png.zip", "noext"] {
            assert!(!is_supported(OsStr::new(name)), "{name}");
        }
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(OsStr::new("photo.JPG")), "photo_anaglyph.JPG");
        assert_eq!(output_file_name(OsStr::new("pic.png")), "pic_anaglyph.png");
        assert_eq!(
            output_file_name(OsStr::new("holiday.2024.tif")),
            "holiday.2024_anaglyph.tif"
        );
    }

    #[test]
    fn test_convert_directory() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        write_image(&input.path().join("photo.JPG"));
        write_image(&input.path().join("pic.png"));
        fs::write(input.path().join("notes.txt"), "not an image").unwrap();

        convert_directory(input.path(), output.path(), &Converter::default()).unwrap();

        assert_eq!(
            listing(output.path()),
            vec!["photo_anaglyph.JPG", "pic_anaglyph.png"]
        );
    }

    #[test]
    fn test_creates_output_directory() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let nested = output.path().join("a/b/c");

        write_image(&input.path().join("pic.bmp"));

        convert_directory(input.path(), &nested, &Converter::default()).unwrap();

        assert_eq!(listing(&nested), vec!["pic_anaglyph.bmp"]);
    }

    #[test]
    fn test_failures_do_not_stop_sweep() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        fs::write(input.path().join("broken.jpg"), b"garbage").unwrap();
        fs::create_dir(input.path().join("nested")).unwrap();
        write_image(&input.path().join("nested/inner.png"));
        write_image(&input.path().join("good.png"));

        convert_directory(input.path(), output.path(), &Converter::default()).unwrap();

        assert_eq!(listing(output.path()), vec!["good_anaglyph.png"]);
    }

    #[test]
    fn test_missing_input_directory() {
        let root = tempfile::tempdir().unwrap();
        let err = convert_directory(
            root.path().join("missing"),
            root.path().join("out"),
            &Converter::default(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::ReadDir { .. }));
    }
}
