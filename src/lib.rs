//! # Squarecrop
//!
//! Batch center-square cropping for images. Point it at one image or a
//! directory of PNGs and a target size; every image comes out as a
//! `target × target` PNG in a fresh `images_<timestamp>/` directory, which
//! can optionally be zipped.
//!
//! # Pipeline
//!
//! ```text
//! path ──► classify ──► decode ──► center crop ──► Lanczos3 resize ──► PNG
//!            │                                                          │
//!            └─ directory: each *.png, failures isolated per file       ▼
//!                                                      images_<ts>/ ──► images_<ts>.zip
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Crop geometry, codec backend, crop/resize/save operations |
//! | [`naming`] | `<stem>_crop_<target>.png` and `images_<timestamp>` names |
//! | [`process`] | Input classification, output directory, single-file and directory runs |
//! | [`archive`] | Deflate-compressed zip of the output directory |
//! | [`output`] | CLI output formatting of a run's report |
//!
//! # Design Decisions
//!
//! ## Crop Never Exceeds the Short Edge
//!
//! The square side is `min(width, height, target)`. A target larger than the
//! short edge crops the whole short edge and then upscales to the target, so
//! every output is exactly `target × target`.
//!
//! ## PNG Everywhere
//!
//! Directory mode picks up PNG sources only; single-file mode accepts any
//! decodable format. Output is always PNG, which is lossless and
//! deterministic: the same input and target give byte-identical files.
//!
//! ## One Bad File Does Not Stop a Batch
//!
//! In directory mode a source that fails to decode is reported and skipped.
//! Failures that concern the output directory itself (write errors) stop the
//! run, since every later image would fail the same way.

pub mod archive;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
