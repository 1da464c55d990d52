//! Error types for mask construction and scoring

use thiserror::Error;

/// Errors surfaced while building binary masks or scoring them
///
/// Zero marginal sums in the confusion matrix are not errors: they are
/// handled by the saturated +1.0/-1.0 outputs of the coefficient formula
/// and never reach the caller as a failure.
#[derive(Error, Debug)]
pub enum MccError {
    /// The two masks differ in dimensions. Fatal to the call, never retried.
    #[error("mask dimensions do not match: ground truth is {expected:?}, test is {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// A mask cell holds a value outside the two sentinel levels.
    ///
    /// Rejected at construction so the four confusion counts always sum to
    /// the total cell count; a silently skipped cell would break that
    /// invariant.
    #[error("cell {index} holds {value}; binary masks may only contain 0 or 255")]
    MalformedInput { value: u8, index: usize },

    /// A flat buffer cannot form a mask of the requested dimensions.
    #[error("buffer of {actual} cells cannot form a {rows}x{cols} mask")]
    BufferLength {
        rows: usize,
        cols: usize,
        actual: usize,
    },

    /// Image decoding or file access failure while loading a mask.
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
}
