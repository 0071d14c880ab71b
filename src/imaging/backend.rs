//! Image codec backend trait and shared types.
//!
//! The [`ImageBackend`] trait covers the two operations that touch the
//! filesystem: decoding a source image and encoding a PNG. Everything in
//! between (crop, resize) is a pure transform in
//! [`operations`](super::operations).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend).

use image::DynamicImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("Failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
    #[error("Target size {target}px is too large to process {}", path.display())]
    TooLarge { path: PathBuf, target: u32 },
}

impl BackendError {
    /// Decode failures only affect the one source image; a batch can continue.
    pub fn is_per_item(&self) -> bool {
        matches!(self, BackendError::Decode { .. })
    }
}

/// Trait for image codec backends.
pub trait ImageBackend {
    /// Decode the image at `path` into memory.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Encode `image` as PNG at `path`, replacing any existing file.
    fn encode_png(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mock backend that records operations without touching pixels on disk.
    ///
    /// Decoding yields a blank image of the configured size; files whose name
    /// is listed in `failing` fail to decode.
    pub struct MockBackend {
        pub dimensions: (u32, u32),
        pub failing: Vec<String>,
        pub operations: RefCell<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Decode(String),
        EncodePng {
            output: String,
            width: u32,
            height: u32,
        },
    }

    impl MockBackend {
        pub fn with_dimensions(width: u32, height: u32) -> Self {
            Self {
                dimensions: (width, height),
                failing: Vec::new(),
                operations: RefCell::new(Vec::new()),
            }
        }

        pub fn failing_on(mut self, names: &[&str]) -> Self {
            self.failing = names.iter().map(|n| n.to_string()).collect();
            self
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }

        pub fn encoded_outputs(&self) -> Vec<String> {
            self.get_operations()
                .into_iter()
                .filter_map(|op| match op {
                    RecordedOp::EncodePng { output, .. } => Some(output),
                    _ => None,
                })
                .collect()
        }
    }

    impl ImageBackend for MockBackend {
        fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Decode(path.to_string_lossy().to_string()));

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if self.failing.contains(&name) {
                return Err(BackendError::Decode {
                    path: path.to_path_buf(),
                    reason: "mock decode failure".to_string(),
                });
            }

            let (w, h) = self.dimensions;
            Ok(DynamicImage::new_rgb8(w, h))
        }

        fn encode_png(&self, image: &DynamicImage, path: &Path) -> Result<(), BackendError> {
            self.operations.borrow_mut().push(RecordedOp::EncodePng {
                output: path.to_string_lossy().to_string(),
                width: image.width(),
                height: image.height(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_decodes_configured_dimensions() {
        let backend = MockBackend::with_dimensions(800, 600);

        let img = backend.decode(Path::new("/test/image.png")).unwrap();
        assert_eq!((img.width(), img.height()), (800, 600));

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Decode(p) if p == "/test/image.png"));
    }

    #[test]
    fn mock_fails_listed_names() {
        let backend = MockBackend::with_dimensions(10, 10).failing_on(&["bad.png"]);

        let err = backend.decode(Path::new("/in/bad.png")).unwrap_err();
        assert!(err.is_per_item());
        assert!(backend.decode(Path::new("/in/good.png")).is_ok());
    }

    #[test]
    fn mock_records_encode() {
        let backend = MockBackend::with_dimensions(10, 10);
        backend
            .encode_png(&DynamicImage::new_rgb8(64, 64), Path::new("/out/a.png"))
            .unwrap();

        assert_eq!(
            backend.get_operations(),
            vec![RecordedOp::EncodePng {
                output: "/out/a.png".to_string(),
                width: 64,
                height: 64,
            }]
        );
    }

    #[test]
    fn write_errors_are_not_per_item() {
        let err = BackendError::Write {
            path: "/ro/a.png".into(),
            reason: "read-only".into(),
        };
        assert!(!err.is_per_item());
        assert_eq!(err.to_string(), "Failed to write /ro/a.png: read-only");
    }

    #[test]
    fn oversized_target_is_not_per_item() {
        let err = BackendError::TooLarge {
            path: "/in/a.png".into(),
            target: u32::MAX,
        };
        assert!(!err.is_per_item());
    }
}
