//! Photo to paint suggestions in one call.

use crate::catalog::Catalog;
use crate::matcher::{ColorMatchResult, MatchConfig, PaintMatcher};
use paint_core::{ExtractedColor, PixelBuffer, Result};
use paint_extract::{extract_colors, ExtractConfig, Quantizer};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Extracted colors plus their paint matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Representative colors, descending by percentage.
    pub extracted: Vec<ExtractedColor>,
    /// One result per extracted color, same order.
    pub matches: Vec<ColorMatchResult>,
}

/// Extracts representative colors from `pixels` and matches them.
///
/// Extraction failures are terminal; nothing is matched.
pub fn analyze<Q: Quantizer + ?Sized>(
    pixels: &PixelBuffer,
    quantizer: &Q,
    extract_config: &ExtractConfig,
    catalog: &Catalog,
    match_config: &MatchConfig,
) -> Result<Analysis> {
    let matcher = PaintMatcher::new(catalog, match_config.clone());
    let extracted = extract_colors(pixels, quantizer, extract_config)?;
    let matches = matcher.match_colors(&extracted)?;

    info!(
        width = pixels.width(),
        height = pixels.height(),
        colors = extracted.len(),
        vendors = catalog.len(),
        "analysis complete"
    );
    Ok(Analysis { extracted, matches })
}
