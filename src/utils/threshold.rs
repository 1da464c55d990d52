//! Grayscale thresholding
//!
//! Collapses 8-bit grayscale data into the two sentinel levels, either at a
//! fixed cutoff or with Otsu's method for automatic threshold selection.

use crate::mask::{BACKGROUND, FOREGROUND};

/// Fixed cutoff used by the standard pipeline
///
/// Values strictly above 127 become foreground, matching the usual binary
/// threshold applied to 8-bit images.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Collapse grayscale values to the two sentinel levels
///
/// Values strictly above `threshold` map to foreground (255), all others to
/// background (0).
pub fn binarize(data: &[u8], threshold: u8) -> Vec<u8> {
    data.iter()
        .map(|&v| if v > threshold { FOREGROUND } else { BACKGROUND })
        .collect()
}

/// Otsu's method for automatic threshold selection
///
/// Finds the threshold that maximizes inter-class variance over the 256-bin
/// histogram of an 8-bit image.
///
/// # Arguments
/// * `data` - Input grayscale values (e.g. a flattened image)
///
/// # Returns
/// The optimal threshold value; cells above it are foreground
pub fn otsu_threshold(data: &[u8]) -> u8 {
    if data.is_empty() {
        return 0;
    }

    let mut histogram = [0usize; 256];
    for &v in data {
        histogram[v as usize] += 1;
    }

    let total_pixels = data.len() as f64;

    let mut sum_total = 0.0;
    for (i, &count) in histogram.iter().enumerate() {
        sum_total += i as f64 * count as f64;
    }

    let mut sum_background = 0.0;
    let mut weight_background = 0.0;
    let mut max_variance = 0.0;
    let mut optimal_threshold = 0u8;

    for (t, &count) in histogram.iter().enumerate() {
        weight_background += count as f64;
        if weight_background == 0.0 {
            continue;
        }

        let weight_foreground = total_pixels - weight_background;
        if weight_foreground == 0.0 {
            break;
        }

        sum_background += t as f64 * count as f64;

        let mean_background = sum_background / weight_background;
        let mean_foreground = (sum_total - sum_background) / weight_foreground;

        // Inter-class variance
        let variance = weight_background
            * weight_foreground
            * (mean_background - mean_foreground).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = t as u8;
        }
    }

    optimal_threshold
}
