//! Common test utilities for mcc-core integration tests

use mcc_core::mask::BinaryMask;

/// Create a binary disc mask on a 2-D grid
///
/// Cells within `radius` of the center become foreground. Row-major
/// ordering: index = col + row * cols.
pub fn create_disc_mask(
    rows: usize,
    cols: usize,
    center_row: f64,
    center_col: f64,
    radius: f64,
) -> BinaryMask {
    let r2 = radius * radius;
    BinaryMask::from_fn(rows, cols, |r, c| {
        let dr = r as f64 - center_row;
        let dc = c as f64 - center_col;
        dr * dr + dc * dc <= r2
    })
}

/// Checkerboard mask with alternating sentinel levels
pub fn checkerboard(rows: usize, cols: usize) -> BinaryMask {
    BinaryMask::from_fn(rows, cols, |r, c| (r + c) % 2 == 0)
}

/// Mask with every cell flipped to the opposite sentinel level
pub fn invert(mask: &BinaryMask) -> BinaryMask {
    let (rows, cols) = mask.dims();
    let data = mask.data();
    BinaryMask::from_fn(rows, cols, |r, c| data[c + r * cols] == 0)
}

/// Deterministic pseudo-random mask (xorshift)
pub fn random_mask(rows: usize, cols: usize, mut seed: u64) -> BinaryMask {
    BinaryMask::from_fn(rows, cols, |_, _| {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed % 2 == 0
    })
}
