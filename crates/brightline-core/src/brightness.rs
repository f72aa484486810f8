//! Frame-level brightness estimation entry points.
//!
//! These functions tie the pipeline together: validate the incoming
//! buffer once, fold it into a histogram (sequentially or chunk-parallel)
//! and extract the brightness threshold. Per-pixel code never
//! re-validates; a malformed buffer is rejected here or not at all.

use image::RgbaImage;
use thiserror::Error;

use crate::histogram::{compute_histogram, compute_histogram_parallel};
use crate::threshold::brightness_threshold;
use crate::TargetProportion;

/// Error types for brightness estimation.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The byte buffer does not hold a whole number of RGBA pixels.
    #[error("Invalid pixel data: {len} bytes is not a whole number of RGBA pixels")]
    InvalidPixelData {
        /// Length of the rejected buffer.
        len: usize,
    },
}

/// Estimate the working brightness of a frame from packed RGBA bytes.
///
/// Returns the luminance level at or above which `proportion` of the
/// frame's pixel mass lies; an empty buffer reports 0.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel); alpha is ignored
/// * `proportion` - share of pixel mass required at or above the result
///
/// # Errors
/// [`EstimateError::InvalidPixelData`] if the buffer length is not a
/// multiple of 4.
///
/// # Example
/// ```
/// use brightline_core::{estimate_brightness, TargetProportion};
///
/// let mut frame = vec![255u8; 15 * 4]; // 15 white pixels
/// frame.extend_from_slice(&[0, 0, 0, 255]); // one black pixel
///
/// let level = estimate_brightness(&frame, TargetProportion::default()).unwrap();
/// assert_eq!(level, 255);
/// ```
pub fn estimate_brightness(
    pixels: &[u8],
    proportion: TargetProportion,
) -> Result<u8, EstimateError> {
    check_rgba_len(pixels)?;
    Ok(brightness_threshold(&compute_histogram(pixels), proportion))
}

/// Estimate the working brightness of a frame, folding chunks in parallel.
///
/// Produces the same value as [`estimate_brightness`] for every input;
/// the histogram merge is order-independent, so the chunk partition never
/// shows in the result.
///
/// # Errors
/// [`EstimateError::InvalidPixelData`] if the buffer length is not a
/// multiple of 4.
pub fn estimate_brightness_parallel(
    pixels: &[u8],
    proportion: TargetProportion,
) -> Result<u8, EstimateError> {
    check_rgba_len(pixels)?;
    Ok(brightness_threshold(
        &compute_histogram_parallel(pixels),
        proportion,
    ))
}

/// Estimate the working brightness of a decoded [`RgbaImage`].
///
/// Infallible: the image buffer is a whole number of RGBA pixels by
/// construction. Frames are folded in parallel.
pub fn estimate_image_brightness(image: &RgbaImage, proportion: TargetProportion) -> u8 {
    brightness_threshold(&compute_histogram_parallel(image.as_raw()), proportion)
}

fn check_rgba_len(pixels: &[u8]) -> Result<(), EstimateError> {
    if pixels.len() % 4 != 0 {
        return Err(EstimateError::InvalidPixelData { len: pixels.len() });
    }
    Ok(())
}
