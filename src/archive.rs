//! Zip archiving of a run's output directory.
//!
//! The archive sits next to the directory (`images_<ts>.zip` beside
//! `images_<ts>/`) and its entries are named relative to the directory's
//! parent, so extracting it recreates the `images_<ts>/` folder:
//!
//! ```text
//! images_20261019_101500.zip
//! └── images_20261019_101500/
//!     ├── beach_crop_2000.png
//!     └── harbor_crop_2000.png
//! ```
//!
//! The source directory is left on disk.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk output directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// `<output_dir>.zip`
pub fn archive_path_for(output_dir: &Path) -> PathBuf {
    let mut name = OsString::from(output_dir.as_os_str());
    name.push(".zip");
    PathBuf::from(name)
}

/// Archive entry name: `path` relative to `base`, `/`-separated.
fn entry_name(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Deflate every regular file under `output_dir` into `<output_dir>.zip`.
///
/// An existing archive of the same name is replaced.
pub fn create_zip_file(output_dir: &Path) -> Result<PathBuf, ArchiveError> {
    let archive_path = archive_path_for(output_dir);
    let base = output_dir.parent().unwrap_or(Path::new(""));

    // Walk before creating the archive so a walk failure leaves nothing behind
    let mut files = Vec::new();
    for entry in WalkDir::new(output_dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    write_archive(&archive_path, &files, base)?;
    Ok(archive_path)
}

/// Write `files` into a fresh archive at `archive_path`, entries named
/// relative to `base`. A failure after the archive is created removes it.
fn write_archive(archive_path: &Path, files: &[PathBuf], base: &Path) -> Result<(), ArchiveError> {
    let file = File::create(archive_path)?;
    let result = write_entries(file, files, base);
    if result.is_err() {
        if let Err(e) = std::fs::remove_file(archive_path) {
            warn!(path = %archive_path.display(), error = %e, "could not remove partial archive");
        }
    }
    result
}

fn write_entries(file: File, files: &[PathBuf], base: &Path) -> Result<(), ArchiveError> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(BufWriter::new(file));

    for path in files {
        let name = entry_name(path, base);
        debug!(entry = %name, "archiving");
        zip.start_file(name, options)?;
        let mut source = File::open(path)?;
        std::io::copy(&mut source, &mut zip)?;
    }

    let mut writer = zip.finish()?;
    writer.flush()?;
    Ok(())
}
