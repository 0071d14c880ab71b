//! Output naming conventions.
//!
//! - Processed images: `<stem>_crop_<target>.png` (always PNG, whatever the source format)
//! - Run directory: `images_<YYYYMMDD_HHMMSS>`

use chrono::NaiveDateTime;
use std::path::Path;

/// Prefix of every run's output directory.
pub const OUTPUT_DIR_PREFIX: &str = "images_";

/// Derive the output filename for a source image.
///
/// - `"photos/beach.jpg"`, 2000 → `"beach_crop_2000.png"`
/// - `"IMG.PNG"`, 64 → `"IMG_crop_64.png"`
/// - `"archive.tar.png"`, 10 → `"archive.tar_crop_10.png"` (only the last extension is dropped)
pub fn output_filename(source: &Path, target: u32) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{stem}_crop_{target}.png")
}

/// Name of the output directory for a run started at `started`.
pub fn output_dir_name(started: NaiveDateTime) -> String {
    format!("{OUTPUT_DIR_PREFIX}{}", started.format("%Y%m%d_%H%M%S"))
}
