//! CLI output formatting.
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ```text
//! 001 beach.png
//!     Crop: 1000,500 → 3000,2500 (2000px)
//!     Output: beach_crop_2000.png
//! 002 (broken.png)
//!     Failed: Failed to decode input/broken.png: ...
//!
//! Skipped 2 non-PNG files
//! Cropped 1 image, 1 failed → images_20261019_101500
//! ```

use crate::imaging::CropBox;
use crate::process::{BatchReport, WrittenImage};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_crop_box(b: &CropBox) -> String {
    format!(
        "{},{} → {},{} ({}px)",
        b.left,
        b.top,
        b.right,
        b.bottom,
        b.width()
    )
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn format_written(index: usize, written: &WrittenImage) -> Vec<String> {
    vec![
        format!("{} {}", format_index(index), file_name(&written.source)),
        format!("{}Crop: {}", indent(1), format_crop_box(&written.crop_box)),
        format!("{}Output: {}", indent(1), file_name(&written.output)),
    ]
}

/// Format the per-image lines and the closing summary of a run.
///
/// Written and failed images share one index sequence, written first.
pub fn format_batch_report(report: &BatchReport, output_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let mut index = 0;

    for written in &report.written {
        index += 1;
        lines.extend(format_written(index, written));
    }
    for failed in &report.failed {
        index += 1;
        lines.push(format!("{} ({})", format_index(index), file_name(&failed.source)));
        lines.push(format!("{}Failed: {}", indent(1), failed.error));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    if !report.skipped.is_empty() {
        lines.push(format!(
            "Skipped {}",
            plural(report.skipped.len(), "non-PNG file", "non-PNG files")
        ));
    }

    let mut summary = format!(
        "Cropped {}",
        plural(report.written.len(), "image", "images")
    );
    if !report.failed.is_empty() {
        summary.push_str(&format!(", {} failed", report.failed.len()));
    }
    summary.push_str(&format!(" → {}", output_dir.display()));
    lines.push(summary);

    lines
}

pub fn print_batch_report(report: &BatchReport, output_dir: &Path) {
    for line in format_batch_report(report, output_dir) {
        println!("{}", line);
    }
}
