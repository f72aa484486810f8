//! Brightline Core - Working-brightness estimation
//!
//! This crate turns a frame of RGBA pixels into a single brightness
//! threshold: the luminance level at or above which a target share of the
//! frame's pixel mass lies. The pipeline is a histogram fold (one private
//! histogram per chunk of pixels), an associative merge of the partials,
//! and an O(256) reverse-cumulative scan over the combined histogram.

pub mod brightness;
pub mod histogram;
pub mod luminance;
pub mod threshold;

pub use brightness::{
    estimate_brightness, estimate_brightness_parallel, estimate_image_brightness, EstimateError,
};
pub use histogram::{compute_histogram, compute_histogram_parallel};
pub use threshold::brightness_threshold;

/// Share of total pixel mass that must lie at or above the reported
/// brightness level, as an exact integer fraction.
///
/// Kept as numerator/denominator rather than a float so the target pixel
/// count is computed with truncating integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TargetProportion {
    /// Fraction numerator.
    pub numerator: u32,
    /// Fraction denominator (must be non-zero).
    pub denominator: u32,
}

impl Default for TargetProportion {
    fn default() -> Self {
        // The brightest 15/16 of the frame sits at or above the reported level
        Self {
            numerator: 15,
            denominator: 16,
        }
    }
}

impl TargetProportion {
    /// Create a proportion from an integer fraction.
    pub fn new(numerator: u32, denominator: u32) -> Self {
        debug_assert!(denominator > 0, "proportion denominator must be non-zero");
        Self {
            numerator,
            denominator,
        }
    }

    /// Number of pixels out of `total` that must lie at or above the
    /// reported level. Truncates, never rounds.
    pub fn target_count(&self, total: u64) -> u64 {
        total * u64::from(self.numerator) / u64::from(self.denominator)
    }
}

/// Luminance histogram for one frame (or one chunk of a frame).
///
/// The sum of all counters equals the number of pixels folded in so far.
/// A histogram has exactly one writer at a time: workers each own a
/// private partial, and [`Histogram::merge`] consumes both inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    /// Pixel count per luminance level (256 bins).
    pub levels: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { levels: [0; 256] }
    }
}

impl Histogram {
    /// Create a new empty histogram.
    ///
    /// This is the identity element of [`Histogram::merge`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one pixel in, bumping the counter of its luminance level.
    /// Alpha plays no part in the luminance weighting.
    #[inline]
    pub fn accumulate(&mut self, r: u8, g: u8, b: u8) {
        let level = luminance::luminance_level(r, g, b);
        self.levels[level as usize] += 1;
    }

    /// Merge two partial histograms by summing counters per level.
    ///
    /// Associative and commutative, so a reduction tree may combine
    /// partials in any order or grouping and produce the same result.
    pub fn merge(mut self, other: Histogram) -> Histogram {
        for (count, partial) in self.levels.iter_mut().zip(other.levels.iter()) {
            *count += partial;
        }
        self
    }

    /// Total number of pixels folded into this histogram.
    pub fn total(&self) -> u64 {
        self.levels.iter().map(|&count| u64::from(count)).sum()
    }

    /// Check for blown-out pixels (mass at level 255).
    pub fn has_clipped_highlights(&self) -> bool {
        self.levels[255] > 0
    }

    /// Check for crushed pixels (mass at level 0).
    pub fn has_crushed_shadows(&self) -> bool {
        self.levels[0] > 0
    }
}
