//! Score a binary test segmentation against a ground-truth image
//!
//! Usage: cargo run --release --example compare_masks -- <test_image> <ground_truth> [--otsu]
//!
//! Both images are loaded as 8-bit grayscale and thresholded to the two
//! sentinel levels (fixed cutoff 127, or Otsu with `--otsu`) before scoring.

use std::env;
use std::path::Path;
use std::time::Instant;

use mcc_core::image_io::read_gray_image;
use mcc_core::mask::BinaryMask;
use mcc_core::mcc::mcc_default;
use mcc_core::utils::{binarize, otsu_threshold, DEFAULT_THRESHOLD};

fn main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let use_otsu = if let Some(pos) = args.iter().position(|a| a == "--otsu") {
        args.remove(pos);
        true
    } else {
        false
    };

    if args.len() != 2 {
        return Err("usage: compare_masks <test_image> <ground_truth_image> [--otsu]".to_string());
    }

    let start = Instant::now();
    let test = load_mask(&args[0], use_otsu)?;
    let truth = load_mask(&args[1], use_otsu)?;
    let (rows, cols) = truth.dims();
    println!("[INFO] Loaded {}x{} masks in {:.2?}", rows, cols, start.elapsed());

    let start = Instant::now();
    let score = mcc_default(&test, &truth).map_err(|e| e.to_string())?;
    println!("[INFO] Scored in {:.2?}", start.elapsed());

    println!("MCC: {}", score);
    Ok(())
}

fn load_mask(path: &str, use_otsu: bool) -> Result<BinaryMask, String> {
    let gray = read_gray_image(Path::new(path)).map_err(|e| e.to_string())?;
    let threshold = if use_otsu {
        let t = otsu_threshold(&gray.data);
        println!("[INFO] Otsu threshold for {}: {}", path, t);
        t
    } else {
        DEFAULT_THRESHOLD
    };
    let (rows, cols) = gray.dims;
    BinaryMask::new(binarize(&gray.data, threshold), rows, cols).map_err(|e| e.to_string())
}
