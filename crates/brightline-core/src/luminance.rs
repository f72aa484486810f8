//! Pixel-to-luminance-level mapping using ITU-R BT.709 coefficients.
//!
//! Every pixel entering the histogram passes through [`luminance_level`],
//! which collapses the three color channels into one of 256 discrete
//! brightness buckets.

/// ITU-R BT.709 coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.0722;

/// Map one pixel's RGB channels to a luminance level in 0..=255.
///
/// The weighted sum is rounded half-away-from-zero (`f32::round`). Total
/// over all 8-bit inputs: the coefficients sum to 1, so the result cannot
/// leave the 8-bit range; the clamp only guards float noise.
#[inline]
pub fn luminance_level(r: u8, g: u8, b: u8) -> u8 {
    let luma = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    luma.clamp(0.0, 255.0).round() as u8
}
