//! Pure Rust codec backend built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::ImageReader` with content sniffing |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::backend::{BackendError, ImageBackend};
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::LazyLock;

/// Extensions whose decoders are compiled in.
const INPUT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    INPUT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// Map a path's extension (case-insensitive) to a decodable format.
pub fn input_format(path: &Path) -> Option<ImageFormat> {
    let ext = path.extension()?.to_str()?;
    INPUT_CANDIDATES
        .iter()
        .find(|(candidate, fmt)| candidate.eq_ignore_ascii_case(ext) && fmt.reading_enabled())
        .map(|(_, fmt)| *fmt)
}

/// Whether a directory entry counts as a PNG source: its name ends in
/// `.png`, any case. A bare `.png` has no extension but still matches.
pub fn is_png_source(path: &Path) -> bool {
    match input_format(path) {
        Some(fmt) => fmt == ImageFormat::Png,
        None => path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.to_ascii_lowercase().ends_with(".png")),
    }
}

/// `image` crate backend. Stateless.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, reason: impl ToString) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn write_error(path: &Path, reason: impl ToString) -> BackendError {
    BackendError::Write {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// PNG has no float sample type; widen those to 16-bit RGBA.
fn png_compatible(image: &DynamicImage) -> Option<DynamicImage> {
    match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            Some(DynamicImage::ImageRgba16(image.to_rgba16()))
        }
        _ => None,
    }
}

impl ImageBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)
            .map_err(|e| decode_error(path, e))?
            .with_guessed_format()
            .map_err(|e| decode_error(path, e))?
            .decode()
            .map_err(|e| decode_error(path, e))
    }

    fn encode_png(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError> {
        let converted = png_compatible(image);
        let image = converted.as_ref().unwrap_or(image);

        let file = File::create(path).map_err(|e| write_error(path, e))?;
        let mut writer = BufWriter::new(file);
        image
            .write_with_encoder(PngEncoder::new(&mut writer))
            .map_err(|e| write_error(path, e))?;
        writer.flush().map_err(|e| write_error(path, e))
    }
}
