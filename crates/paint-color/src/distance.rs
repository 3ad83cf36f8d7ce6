//! Color distances and the match percentage heuristic.
//!
//! Two metrics are used by the pipeline:
//!
//! | Metric | Space | Used for |
//! |--------|-------|----------|
//! | [`rgb_distance`] | 8-bit sRGB | duplicate screening during extraction |
//! | [`delta_e76`] | CIE L\*a\*b\* | ranking paint chips |
//!
//! [`match_percentage`] maps ΔE to a 0..=100 score with a linear falloff of
//! [`MATCH_SLOPE`] per ΔE unit. A ΔE of about 2.3 is a just noticeable
//! difference; anything past ΔE 66.7 scores 0. The slope is a fixed part of
//! the report format, not a physical constant.

use crate::lab::{lab_distance, Lab};
use paint_core::Rgb8;

/// Percentage points lost per unit of ΔE.
pub const MATCH_SLOPE: f64 = 1.5;

/// Euclidean distance between two colors in 8-bit RGB space.
///
/// # Example
///
/// ```rust
/// use paint_core::Rgb8;
/// use paint_color::rgb_distance;
///
/// let d = rgb_distance(Rgb8::new(10, 10, 10), Rgb8::new(12, 12, 12));
/// assert!((d - 12f64.sqrt()).abs() < 1e-12);
/// ```
#[inline]
pub fn rgb_distance(a: Rgb8, b: Rgb8) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// CIE76 color difference: unweighted Euclidean distance in Lab.
#[inline]
pub fn delta_e76(a: Lab, b: Lab) -> f64 {
    lab_distance(a, b)
}

/// Converts a ΔE distance into an integer match score.
///
/// `round(max(0, 100 - distance * 1.5))`, clamped to 0..=100. Non-finite
/// distances (used for unparseable catalog entries) score 0.
#[inline]
pub fn match_percentage(distance: f64) -> u8 {
    if !distance.is_finite() {
        return 0;
    }
    (100.0 - distance * MATCH_SLOPE).max(0.0).round().clamp(0.0, 100.0) as u8
}
