//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (JPEG, PNG, TIFF, WebP) |
//! | **Crop** | `DynamicImage::crop_imm` on a centered square box |
//! | **Resize** | `DynamicImage::resize_exact` with Lanczos3 |
//! | **Encode** | `image::codecs::png::PngEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure crop-box math (unit testable)
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{CropBox, compute_crop_box};
pub use operations::{CroppedImage, crop_square, process_image, save_image};
pub use rust_backend::{RustBackend, input_format, is_png_source, supported_input_extensions};
