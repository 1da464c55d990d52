//! Grayscale image loading
//!
//! Decodes image files into flat luma buffers and thresholded binary masks.
//! This is the plumbing layer in front of the scorer: it is responsible for
//! collapsing greyscale noise into the two sentinel levels before a mask is
//! ever built.

use std::path::Path;

use crate::error::MccError;
use crate::mask::BinaryMask;
use crate::utils::threshold::binarize;

/// Grayscale image data loaded from a file
pub struct GrayData {
    /// Luma values, row-major
    pub data: Vec<u8>,
    /// Dimensions (rows, cols)
    pub dims: (usize, usize),
}

/// Load an image file and convert it to 8-bit grayscale
///
/// Any format supported by the enabled image codecs is accepted; color
/// images are converted to luma.
pub fn read_gray_image(path: &Path) -> Result<GrayData, MccError> {
    let img = image::open(path)?.to_luma8();
    let (width, height) = img.dimensions();
    Ok(GrayData {
        data: img.into_raw(),
        dims: (height as usize, width as usize),
    })
}

/// Load an image file, threshold it, and wrap it as a binary mask
///
/// Values strictly above `threshold` become foreground. This is the
/// composed path drivers use to feed the scorer.
pub fn read_binary_mask(path: &Path, threshold: u8) -> Result<BinaryMask, MccError> {
    let gray = read_gray_image(path)?;
    let (rows, cols) = gray.dims;
    BinaryMask::new(binarize(&gray.data, threshold), rows, cols)
}
