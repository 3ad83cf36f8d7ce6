//! Palette screening and weighting.
//!
//! Turns a quantizer's `{dominant, palette}` into at most three
//! [`ExtractedColor`]s:
//!
//! ```text
//! dominant            -> weight 60
//! palette[i]          -> skipped if within 25 (RGB) of any accepted color
//!                        else weight max(5, 30 - 5*i)
//! stable sort by weight, keep max_colors, scale to percentages summing 100
//! ```
//!
//! `i` is the candidate's position in the palette as returned by the
//! quantizer, so skipped candidates still consume an index.

use crate::config::ExtractConfig;
use crate::quantize::{Quantized, Quantizer};
use paint_color::rgb_distance;
use paint_core::{ExtractedColor, PixelBuffer, Result, Rgb8};
use tracing::{debug, trace};

/// Weight of the first palette candidate.
pub const FIRST_CANDIDATE_WEIGHT: u32 = 30;
/// Weight lost per palette position.
pub const WEIGHT_STEP: u32 = 5;
/// Floor for candidate weights.
pub const MIN_CANDIDATE_WEIGHT: u32 = 5;

/// A screened color with its pre-normalization weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedColor {
    /// Color
    pub rgb: Rgb8,
    /// Weight in percentage units before normalization
    pub weight: u32,
}

/// Weight of an accepted candidate at palette position `index`.
///
/// ```rust
/// use paint_extract::candidate_weight;
///
/// assert_eq!(candidate_weight(0), 30);
/// assert_eq!(candidate_weight(1), 25);
/// assert_eq!(candidate_weight(9), 5);
/// ```
#[inline]
pub fn candidate_weight(index: usize) -> u32 {
    let step = u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(WEIGHT_STEP);
    FIRST_CANDIDATE_WEIGHT
        .saturating_sub(step)
        .max(MIN_CANDIDATE_WEIGHT)
}

/// Screens a quantizer result into weighted, deduplicated colors.
///
/// The dominant color comes first. A candidate is dropped when its RGB
/// distance to the dominant or to any previously accepted candidate is
/// below `config.similarity_threshold`.
pub fn screen_palette(quantized: &Quantized, config: &ExtractConfig) -> Vec<WeightedColor> {
    let mut accepted = vec![WeightedColor {
        rgb: quantized.dominant,
        weight: config.dominant_weight,
    }];

    for (index, &candidate) in quantized.palette.iter().enumerate() {
        let duplicate = accepted
            .iter()
            .any(|c| rgb_distance(c.rgb, candidate) < config.similarity_threshold);
        if duplicate {
            trace!(index, %candidate, "skipping near-duplicate palette color");
            continue;
        }
        let weight = candidate_weight(index);
        trace!(index, %candidate, weight, "accepted palette color");
        accepted.push(WeightedColor {
            rgb: candidate,
            weight,
        });
    }

    accepted
}

/// Orders, truncates and normalizes weighted colors to percentages.
///
/// Percentages are `round(100 * w / total)` over the kept colors, with any
/// rounding residual folded into the first (largest) entry so the result
/// always sums to exactly 100. Equal percentages keep their input order.
pub fn normalize(mut colors: Vec<WeightedColor>, max_colors: usize) -> Vec<ExtractedColor> {
    colors.sort_by_key(|c| std::cmp::Reverse(c.weight));
    colors.truncate(max_colors.max(1));

    let total: u64 = colors.iter().map(|c| c.weight as u64).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut percents: Vec<i64> = colors
        .iter()
        .map(|c| (100.0 * c.weight as f64 / total as f64).round() as i64)
        .collect();
    let residual = 100 - percents.iter().sum::<i64>();
    percents[0] += residual;

    let mut out: Vec<ExtractedColor> = colors
        .iter()
        .zip(percents)
        .map(|(c, p)| ExtractedColor::from_rgb(c.rgb, p.clamp(0, 100) as u8))
        .collect();
    out.sort_by_key(|c| std::cmp::Reverse(c.percentage));
    out
}

/// Reduces pixel buffers to weighted representative colors.
///
/// # Example
///
/// ```rust
/// use paint_core::{PixelBuffer, Rgb8};
/// use paint_extract::ColorExtractor;
///
/// let pixels = PixelBuffer::filled(32, 32, Rgb8::new(90, 140, 200)).unwrap();
/// let colors = ColorExtractor::new().extract(&pixels).unwrap();
/// assert_eq!(colors.len(), 1);
/// assert_eq!(colors[0].percentage, 100);
/// ```
#[derive(Debug, Clone)]
pub struct ColorExtractor<Q = crate::MedianCut> {
    quantizer: Q,
    config: ExtractConfig,
}

impl ColorExtractor {
    /// Extractor using [`crate::MedianCut`] and default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor using [`crate::MedianCut`] configured from `config`.
    pub fn from_config(config: ExtractConfig) -> Self {
        Self {
            quantizer: crate::MedianCut::from_config(&config),
            config,
        }
    }
}

impl Default for ColorExtractor {
    fn default() -> Self {
        Self::from_config(ExtractConfig::default())
    }
}

impl<Q: Quantizer> ColorExtractor<Q> {
    /// Extractor using a custom quantizer.
    pub fn with_quantizer(quantizer: Q, config: ExtractConfig) -> Self {
        Self { quantizer, config }
    }

    /// Active parameters.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extracts up to `max_colors` representative colors.
    ///
    /// # Errors
    ///
    /// - [`paint_core::Error::InvalidParameter`] for an invalid config
    /// - [`paint_core::Error::QuantizationFailure`] if the quantizer fails;
    ///   no partial palette is returned
    pub fn extract(&self, pixels: &PixelBuffer) -> Result<Vec<ExtractedColor>> {
        extract_colors(pixels, &self.quantizer, &self.config)
    }
}

/// Runs quantization, screening and normalization.
///
/// Output has 1 to `config.max_colors` entries, sorted by descending
/// percentage, percentages summing to 100.
pub fn extract_colors<Q: Quantizer + ?Sized>(
    pixels: &PixelBuffer,
    quantizer: &Q,
    config: &ExtractConfig,
) -> Result<Vec<ExtractedColor>> {
    config.validate()?;
    let (width, height) = pixels.dimensions();

    let quantized = quantizer.quantize(pixels, config.palette_size)?;
    debug!(
        width,
        height,
        dominant = %quantized.dominant,
        candidates = quantized.palette.len(),
        "quantized image"
    );

    let screened = screen_palette(&quantized, config);
    let colors = normalize(screened, config.max_colors);
    debug!(colors = colors.len(), "extracted colors");
    Ok(colors)
}
