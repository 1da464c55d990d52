//! Confusion-matrix counting over binary mask pairs
//!
//! Reduces a (test, ground-truth) mask pair to the four classification
//! counts: true positives, false positives, true negatives, and false
//! negatives. Two counting strategies share the same contract and produce
//! identical counts; the bulk strategy is the performance-preferred default.

use crate::error::MccError;
use crate::mask::{BinaryMask, BACKGROUND, FOREGROUND};
use crate::utils::simd_ops::count_equal_u16;

/// Relabeled background level for the test mask in the bulk encoding
const TEST_BACKGROUND_CODE: u16 = 1;

/// Relabeled background level for the ground-truth mask in the bulk encoding
const TRUTH_BACKGROUND_CODE: u16 = 2;

/// Product of encoded (test foreground, truth foreground): 255 * 255
const TP_PRODUCT: u16 = FOREGROUND as u16 * FOREGROUND as u16;

/// Product of encoded (test foreground, truth background): 255 * 2
const FP_PRODUCT: u16 = FOREGROUND as u16 * TRUTH_BACKGROUND_CODE;

/// Product of encoded (test background, truth background): 1 * 2
const TN_PRODUCT: u16 = TEST_BACKGROUND_CODE * TRUTH_BACKGROUND_CODE;

/// Product of encoded (test background, truth foreground): 1 * 255
const FN_PRODUCT: u16 = TEST_BACKGROUND_CODE * FOREGROUND as u16;

/// Counting strategy for building [`ConfusionCounts`]
///
/// Both strategies produce identical counts for any pair of valid masks;
/// they differ only in how the counting pass is organized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Arithmetic encoding on private widened copies: relabel backgrounds so
    /// the elementwise product takes one distinct value per category, then
    /// count occurrences of each product in bulk. Branch-free per cell and
    /// preferred for large masks.
    #[default]
    Bulk,
    /// Classify each cell pair directly against the sentinel levels and
    /// accumulate one tally per category in a single pass.
    Tally,
}

/// The four confusion-matrix counts for one mask pair
///
/// Derived, stateless values recomputed per call. For any well-formed pair
/// the four counts sum to the total cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfusionCounts {
    /// Foreground cells correctly marked foreground
    pub true_positives: u64,
    /// Background cells incorrectly marked foreground
    pub false_positives: u64,
    /// Background cells correctly marked background
    pub true_negatives: u64,
    /// Foreground cells incorrectly marked background
    pub false_negatives: u64,
}

impl ConfusionCounts {
    /// Count classification categories for a test mask against ground truth
    ///
    /// # Arguments
    /// * `test` - The segmentation under evaluation
    /// * `truth` - The ground-truth reference
    /// * `strategy` - Counting implementation to use
    ///
    /// # Errors
    /// `ShapeMismatch` if the masks differ in dimensions. Cell values need
    /// no checking here; masks are binary by construction.
    pub fn from_masks(
        test: &BinaryMask,
        truth: &BinaryMask,
        strategy: Strategy,
    ) -> Result<Self, MccError> {
        if test.dims() != truth.dims() {
            return Err(MccError::ShapeMismatch {
                expected: truth.dims(),
                actual: test.dims(),
            });
        }

        let counts = match strategy {
            Strategy::Bulk => count_bulk(test.data(), truth.data()),
            Strategy::Tally => count_tally(test.data(), truth.data()),
        };
        Ok(counts)
    }

    /// Total number of classified cells
    pub fn total(&self) -> u64 {
        self.true_positives + self.false_positives + self.true_negatives + self.false_negatives
    }

    /// Matthews correlation coefficient for these counts
    ///
    /// Returns a value in [-1, 1]. The two saturated outputs cover exactly
    /// the cases in which a marginal sum of a valid binary confusion matrix
    /// can reach zero, and are checked before the square root so the general
    /// formula never divides by zero:
    /// - no misclassified cell at all -> +1.0
    /// - no correctly classified cell of either class -> -1.0
    pub fn matthews(&self) -> f64 {
        let tp = self.true_positives;
        let fp = self.false_positives;
        let tn = self.true_negatives;
        let fn_ = self.false_negatives;

        // identical masks
        if fp == 0 && fn_ == 0 {
            return 1.0;
        }
        // no cell agrees
        if tp == 0 && tn == 0 {
            return -1.0;
        }

        // The marginal sums are multiplied as f64: a product of four
        // multi-million-cell sums overflows u64 long before f64 loses the
        // magnitude.
        let numerator = (tp as f64) * (tn as f64) - (fp as f64) * (fn_ as f64);
        let denominator = ((tp + fp) as f64)
            * ((tp + fn_) as f64)
            * ((tn + fp) as f64)
            * ((tn + fn_) as f64);

        numerator / denominator.sqrt()
    }
}

/// Bulk arithmetic-encoding counting pass
///
/// Operates on private encoded copies; the caller's buffers are never
/// touched.
fn count_bulk(test: &[u8], truth: &[u8]) -> ConfusionCounts {
    let products = encode_product(test, truth);
    ConfusionCounts {
        true_positives: count_equal_u16(&products, TP_PRODUCT),
        false_positives: count_equal_u16(&products, FP_PRODUCT),
        true_negatives: count_equal_u16(&products, TN_PRODUCT),
        false_negatives: count_equal_u16(&products, FN_PRODUCT),
    }
}

/// Encode both masks so the elementwise product separates the categories
///
/// Test background becomes 1 and ground-truth background becomes 2 while
/// foreground stays 255 in both, so the per-cell product takes exactly four
/// distinct values, one per confusion category.
fn encode_product(test: &[u8], truth: &[u8]) -> Vec<u16> {
    debug_assert_eq!(test.len(), truth.len());
    test.iter()
        .zip(truth.iter())
        .map(|(&t, &g)| {
            let t = if t == BACKGROUND {
                TEST_BACKGROUND_CODE
            } else {
                t as u16
            };
            let g = if g == BACKGROUND {
                TRUTH_BACKGROUND_CODE
            } else {
                g as u16
            };
            t * g
        })
        .collect()
}

/// Categorical tally counting pass
fn count_tally(test: &[u8], truth: &[u8]) -> ConfusionCounts {
    debug_assert_eq!(test.len(), truth.len());
    let mut counts = ConfusionCounts::default();
    for (&t, &g) in test.iter().zip(truth.iter()) {
        match (t, g) {
            (FOREGROUND, FOREGROUND) => counts.true_positives += 1,
            (FOREGROUND, BACKGROUND) => counts.false_positives += 1,
            (BACKGROUND, BACKGROUND) => counts.true_negatives += 1,
            _ => counts.false_negatives += 1,
        }
    }
    counts
}
