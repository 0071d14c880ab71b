//! High-level image operations.
//!
//! These functions combine the crop geometry with backend execution:
//! decode → center crop → Lanczos3 resize → PNG encode.

use super::backend::{BackendError, ImageBackend};
use super::calculations::{CropBox, compute_crop_box};
use crate::naming::output_filename;
use image::DynamicImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Widest working pixel: the Lanczos resize runs through an RGBA f32 buffer.
const WORKING_BYTES_PER_PIXEL: u64 = 16;

/// Reject targets whose `target × target` working buffer cannot be addressed,
/// which would otherwise panic inside the resize.
fn check_target_fits(path: &Path, target: u32) -> Result<()> {
    let bytes = u64::from(target)
        .checked_mul(u64::from(target))
        .and_then(|pixels| pixels.checked_mul(WORKING_BYTES_PER_PIXEL));
    match bytes {
        Some(bytes) if bytes <= isize::MAX as u64 => Ok(()),
        _ => Err(BackendError::TooLarge {
            path: path.to_path_buf(),
            target,
        }),
    }
}

/// A cropped, resized image held in memory until it is saved.
#[derive(Debug, Clone)]
pub struct CroppedImage {
    /// Exactly `target × target` pixels.
    pub pixels: DynamicImage,
    /// `<stem>_crop_<target>.png`
    pub filename: String,
    /// Region taken from the source image.
    pub crop_box: CropBox,
}

/// Crop the centered square from `source` and resize it to `target × target`.
///
/// When `target` exceeds the short edge, the crop is the full short edge and
/// the resize upscales.
pub fn crop_square(source: &DynamicImage, target: u32) -> (DynamicImage, CropBox) {
    let crop_box = compute_crop_box(source.width(), source.height(), target);
    let cropped = source.crop_imm(
        crop_box.left,
        crop_box.top,
        crop_box.width(),
        crop_box.height(),
    );
    let resized = if cropped.width() == target && cropped.height() == target {
        cropped
    } else {
        cropped.resize_exact(target, target, FilterType::Lanczos3)
    };
    (resized, crop_box)
}

/// Decode `path` and produce its square crop. Writes nothing.
pub fn process_image(
    backend: &impl ImageBackend,
    path: &Path,
    target: u32,
) -> Result<CroppedImage> {
    check_target_fits(path, target)?;
    let source = backend.decode(path)?;
    debug!(
        path = %path.display(),
        width = source.width(),
        height = source.height(),
        "decoded"
    );

    let (pixels, crop_box) = crop_square(&source, target);
    // Release the full-size decode before the caller encodes
    drop(source);
    debug!(path = %path.display(), ?crop_box, target, "cropped");

    Ok(CroppedImage {
        pixels,
        filename: output_filename(path, target),
        crop_box,
    })
}

/// Write `image` as PNG into `output_dir`, overwriting an existing file of
/// the same name. Returns the written path.
pub fn save_image(
    backend: &impl ImageBackend,
    image: &CroppedImage,
    output_dir: &Path,
) -> Result<PathBuf> {
    let output_path = output_dir.join(&image.filename);
    backend.encode_png(&image.pixels, &output_path)?;
    debug!(path = %output_path.display(), "saved");
    Ok(output_path)
}
