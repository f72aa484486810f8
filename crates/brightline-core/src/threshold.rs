//! Brightness threshold extraction from a combined luminance histogram.
//!
//! A reverse-cumulative percentile query: walk the histogram from the
//! bright end and report the first level where the accumulated pixel
//! count reaches the target share of the frame. O(256) regardless of
//! how many pixels built the histogram.

use crate::{Histogram, TargetProportion};

/// Find the luminance level at or above which `proportion` of the
/// histogram's pixel mass lies.
///
/// An empty histogram reports 0. A histogram with pixels always reports
/// some level, since the scan reaching level 0 has accumulated the whole
/// frame.
///
/// # Example
/// ```
/// use brightline_core::{Histogram, TargetProportion};
/// use brightline_core::threshold::brightness_threshold;
///
/// let mut hist = Histogram::new();
/// for _ in 0..15 {
///     hist.accumulate(255, 255, 255);
/// }
/// hist.accumulate(0, 0, 0);
///
/// // 15 of 16 pixels sit at level 255
/// assert_eq!(brightness_threshold(&hist, TargetProportion::default()), 255);
/// ```
pub fn brightness_threshold(hist: &Histogram, proportion: TargetProportion) -> u8 {
    let total = hist.total();
    if total == 0 {
        return 0;
    }

    // A truncated target of zero would satisfy the scan at level 255
    // before any pixel is counted; a non-empty frame must account for at
    // least one pixel.
    let target = proportion.target_count(total).max(1);

    let mut cumulative = 0u64;
    for (level, &count) in hist.levels.iter().enumerate().rev() {
        cumulative += u64::from(count);
        if cumulative >= target {
            return level as u8;
        }
    }

    // Only reachable when the proportion exceeds one
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_histogram(level: u8, count: u32) -> Histogram {
        let mut hist = Histogram::new();
        hist.levels[level as usize] = count;
        hist
    }

    #[test]
    fn test_empty_histogram_reports_zero() {
        assert_eq!(
            brightness_threshold(&Histogram::new(), TargetProportion::default()),
            0
        );
    }

    #[test]
    fn test_uniform_frame_reports_its_level() {
        for level in [0u8, 1, 77, 128, 254, 255] {
            let hist = uniform_histogram(level, 1000);
            assert_eq!(
                brightness_threshold(&hist, TargetProportion::default()),
                level
            );
        }
    }

    #[test]
    fn test_single_pixel_frame_reports_its_level() {
        let hist = uniform_histogram(93, 1);
        assert_eq!(brightness_threshold(&hist, TargetProportion::default()), 93);
    }

    #[test]
    fn test_fifteen_white_one_black() {
        let mut hist = uniform_histogram(255, 15);
        hist.levels[0] = 1;
        // total=16, target=15; the bright bin alone satisfies the scan
        assert_eq!(
            brightness_threshold(&hist, TargetProportion::default()),
            255
        );
    }

    #[test]
    fn test_fourteen_white_two_black() {
        let mut hist = uniform_histogram(255, 14);
        hist.levels[0] = 2;
        // total=16, target=15; the scan only reaches 15 at level 0
        assert_eq!(brightness_threshold(&hist, TargetProportion::default()), 0);
    }

    #[test]
    fn test_half_bright_half_dark() {
        let mut hist = uniform_histogram(255, 500);
        hist.levels[0] = 500;
        // 15/16 > 1/2, so the dark bin must be included
        assert_eq!(brightness_threshold(&hist, TargetProportion::default()), 0);
    }

    #[test]
    fn test_mass_just_below_target_keeps_scanning() {
        let mut hist = uniform_histogram(200, 59);
        hist.levels[40] = 5;
        // total=64, target=60: level 200 holds 59, one more pixel needed
        assert_eq!(brightness_threshold(&hist, TargetProportion::default()), 40);
    }

    #[test]
    fn test_half_proportion_splits_even_frame() {
        let mut hist = uniform_histogram(255, 8);
        hist.levels[0] = 8;
        // target=8 is met by the bright bin alone
        assert_eq!(
            brightness_threshold(&hist, TargetProportion::new(1, 2)),
            255
        );
    }

    #[test]
    fn test_full_proportion_reports_darkest_occupied_level() {
        let mut hist = uniform_histogram(255, 10);
        hist.levels[33] = 1;
        assert_eq!(
            brightness_threshold(&hist, TargetProportion::new(1, 1)),
            33
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
