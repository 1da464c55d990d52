//! Matthews correlation coefficient scoring
//!
//! Public entry points that reduce a (test, ground-truth) mask pair to a
//! single correlation scalar in [-1, 1]. The computation is pure and
//! stateless: concurrent callers need no synchronization as long as each
//! invocation owns its mask data.

use crate::confusion::{ConfusionCounts, Strategy};
use crate::error::MccError;
use crate::mask::BinaryMask;

/// Score a test segmentation against a ground-truth mask
///
/// # Arguments
/// * `test` - The segmentation under evaluation
/// * `truth` - The ground-truth reference
/// * `strategy` - Confusion-matrix counting implementation
///
/// # Returns
/// The Matthews correlation coefficient in [-1, 1]: +1.0 for perfect
/// agreement, -1.0 when no cell of either class is classified correctly.
///
/// # Errors
/// `ShapeMismatch` if the masks differ in dimensions.
pub fn mcc(test: &BinaryMask, truth: &BinaryMask, strategy: Strategy) -> Result<f64, MccError> {
    Ok(ConfusionCounts::from_masks(test, truth, strategy)?.matthews())
}

/// Score with the default bulk counting strategy
pub fn mcc_default(test: &BinaryMask, truth: &BinaryMask) -> Result<f64, MccError> {
    mcc(test, truth, Strategy::default())
}
