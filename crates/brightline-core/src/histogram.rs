//! Luminance histogram construction from RGBA pixel data.
//!
//! This module folds packed RGBA bytes (4 bytes per pixel, row-major or
//! any other order - ordering does not affect the result) into
//! [`Histogram`] values, either in one sequential pass or chunk-parallel
//! with a merge of the per-chunk partials.

use rayon::prelude::*;

use crate::Histogram;

/// Pixels per worker chunk in the parallel build.
///
/// Large enough that each worker's histogram fill dominates the cost of
/// allocating and merging its 1KB partial.
const PIXELS_PER_CHUNK: usize = 16 * 1024;

/// Compute a luminance histogram from packed RGBA pixel data in one pass.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel); alpha is ignored
///
/// # Example
/// ```
/// use brightline_core::histogram::compute_histogram;
///
/// let pixels = vec![255, 255, 255, 255, 0, 0, 0, 255]; // white, black
/// let hist = compute_histogram(&pixels);
/// assert_eq!(hist.levels[255], 1);
/// assert_eq!(hist.levels[0], 1);
/// ```
///
/// # Performance
/// Single pass, O(n) in the pixel count, constant memory (1KB of bins).
pub fn compute_histogram(pixels: &[u8]) -> Histogram {
    debug_assert!(
        pixels.len() % 4 == 0,
        "Pixel data is not a whole number of RGBA pixels: {} bytes",
        pixels.len()
    );

    let mut hist = Histogram::new();
    for chunk in pixels.chunks_exact(4) {
        hist.accumulate(chunk[0], chunk[1], chunk[2]);
    }
    hist
}

/// Compute a luminance histogram from packed RGBA pixel data in parallel.
///
/// The buffer is split into pixel-aligned chunks, each chunk is folded
/// into its own private histogram, and the partials are merged pairwise
/// with the empty histogram as identity. Because the merge is associative
/// and commutative over integer counters, the result is bit-identical to
/// [`compute_histogram`] for every chunk count, including zero chunks
/// (empty input) and one.
pub fn compute_histogram_parallel(pixels: &[u8]) -> Histogram {
    debug_assert!(
        pixels.len() % 4 == 0,
        "Pixel data is not a whole number of RGBA pixels: {} bytes",
        pixels.len()
    );

    pixels
        .par_chunks(PIXELS_PER_CHUNK * 4)
        .map(compute_histogram)
        .reduce(Histogram::new, Histogram::merge)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
