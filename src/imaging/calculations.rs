//! Pure calculation functions for crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// A rectangle in source-image pixel coordinates.
///
/// `right` and `bottom` are exclusive, so `right - left` is the box width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// Calculate the centered square crop box for an image.
///
/// The side is `min(width, height, target)`: a target larger than the short
/// edge yields the full short edge, which the caller later upscales.
///
/// # Examples
/// ```
/// # use squarecrop::imaging::{CropBox, compute_crop_box};
/// // 4000x3000 landscape, target 2000 → centered 2000px square
/// assert_eq!(
///     compute_crop_box(4000, 3000, 2000),
///     CropBox { left: 1000, top: 500, right: 3000, bottom: 2500 }
/// );
/// ```
pub fn compute_crop_box(width: u32, height: u32, target: u32) -> CropBox {
    let crop_dim = width.min(height).min(target);

    // u64 so width + crop_dim cannot overflow near u32::MAX
    let (w, h, c) = (width as u64, height as u64, crop_dim as u64);
    CropBox {
        left: ((w - c) / 2) as u32,
        top: ((h - c) / 2) as u32,
        right: ((w + c) / 2) as u32,
        bottom: ((h + c) / 2) as u32,
    }
}
