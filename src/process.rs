//! Input dispatch and batch processing.
//!
//! Takes the path given on the command line and turns it into PNG crops in a
//! timestamped output directory.
//!
//! ## Modes
//!
//! - **Single file**: any decodable format. Any failure ends the run.
//! - **Directory**: direct `.png` entries only (case-insensitive, no recursion),
//!   processed in file-name order. A source that fails to decode is recorded
//!   in the [`BatchReport`] and the walk continues; a failed write aborts,
//!   since the output directory itself is the problem.
//!
//! ## Output Structure
//!
//! ```text
//! images_20261019_101500/
//! ├── beach_crop_2000.png
//! └── harbor_crop_2000.png
//! ```

use crate::imaging::{
    BackendError, CropBox, ImageBackend, is_png_source, process_image, save_image,
};
use crate::naming::output_dir_name;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{} is not a valid file or directory", .0.display())]
    InvalidPath(PathBuf),
    #[error("Failed to create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// What the input path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File,
    Directory,
}

/// Classify `path`, following symlinks. Anything missing or neither a
/// regular file nor a directory is [`ProcessError::InvalidPath`].
pub fn classify_input(path: &Path) -> Result<InputKind, ProcessError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(InputKind::File),
        Ok(meta) if meta.is_dir() => Ok(InputKind::Directory),
        _ => Err(ProcessError::InvalidPath(path.to_path_buf())),
    }
}

/// Create `<root>/images_<timestamp>`, including missing parents.
///
/// An existing directory with the same name is reused.
pub fn create_output_dir(root: &Path, started: NaiveDateTime) -> Result<PathBuf, ProcessError> {
    let dir = root.join(output_dir_name(started));
    std::fs::create_dir_all(&dir).map_err(|source| ProcessError::OutputDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// A source image that was cropped and written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenImage {
    pub source: PathBuf,
    pub output: PathBuf,
    pub crop_box: CropBox,
}

/// A source image that could not be decoded.
#[derive(Debug)]
pub struct FailedImage {
    pub source: PathBuf,
    pub error: BackendError,
}

/// Outcome of one run over the input path.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<WrittenImage>,
    pub failed: Vec<FailedImage>,
    /// Regular files in the input directory that are not PNGs.
    pub skipped: Vec<PathBuf>,
}

impl BatchReport {
    fn single(written: WrittenImage) -> Self {
        Self {
            written: vec![written],
            ..Self::default()
        }
    }
}

/// Crop one image and write it into `output_dir`.
pub fn process_file(
    backend: &impl ImageBackend,
    path: &Path,
    target: u32,
    output_dir: &Path,
) -> Result<WrittenImage, BackendError> {
    let image = process_image(backend, path, target)?;
    let output = save_image(backend, &image, output_dir)?;
    Ok(WrittenImage {
        source: path.to_path_buf(),
        output,
        crop_box: image.crop_box,
    })
}

/// Crop every direct `.png` entry of `dir` into `output_dir`.
pub fn process_directory(
    backend: &impl ImageBackend,
    dir: &Path,
    target: u32,
    output_dir: &Path,
) -> Result<BatchReport, ProcessError> {
    let mut report = BatchReport::default();

    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            // Depth 0 is `dir` itself; anything deeper is one bad entry (e.g. a dangling link)
            Err(e) if e.depth() > 0 => {
                warn!(error = %e, "skipping unreadable entry");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_png_source(path) {
            debug!(path = %path.display(), "not a png, skipped");
            report.skipped.push(path.to_path_buf());
            continue;
        }

        match process_file(backend, path, target, output_dir) {
            Ok(written) => report.written.push(written),
            Err(error) if error.is_per_item() => {
                warn!(path = %path.display(), %error, "continuing after failed image");
                report.failed.push(FailedImage {
                    source: path.to_path_buf(),
                    error,
                });
            }
            Err(error) => return Err(error.into()),
        }
    }

    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        skipped = report.skipped.len(),
        "directory processed"
    );
    Ok(report)
}

/// Dispatch `input` to single-file or directory processing.
pub fn process_input(
    backend: &impl ImageBackend,
    kind: InputKind,
    input: &Path,
    target: u32,
    output_dir: &Path,
) -> Result<BatchReport, ProcessError> {
    match kind {
        InputKind::File => Ok(BatchReport::single(process_file(
            backend, input, target, output_dir,
        )?)),
        InputKind::Directory => process_directory(backend, input, target, output_dir),
    }
}
