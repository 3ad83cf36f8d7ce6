//! Extraction parameters.
//!
//! Defaults reproduce the published weighting contract: dominant weight 60,
//! duplicate threshold 25, five palette candidates, three reported colors.
//! Changing them changes the percentages callers see, so they are exposed
//! for experimentation rather than tuning in production.

use paint_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters for [`crate::ColorExtractor`] and [`crate::MedianCut`].
///
/// Deserializes with every field optional:
///
/// ```rust
/// use paint_extract::ExtractConfig;
///
/// let cfg: ExtractConfig = serde_yaml::from_str("max_colors: 2").unwrap();
/// assert_eq!(cfg.max_colors, 2);
/// assert_eq!(cfg.palette_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Number of palette candidates requested from the quantizer.
    pub palette_size: usize,
    /// Sampling step: every `quality`-th pixel is histogrammed. 1 = all.
    pub quality: usize,
    /// Pixels with alpha below this are ignored by the quantizer.
    pub min_alpha: u8,
    /// Ignore near-white pixels (all channels above 250).
    pub ignore_white: bool,
    /// Pre-normalization weight of the dominant color.
    pub dominant_weight: u32,
    /// RGB distance below which two colors are considered duplicates.
    pub similarity_threshold: f64,
    /// Maximum number of colors reported.
    pub max_colors: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            palette_size: 5,
            quality: 10,
            min_alpha: 125,
            ignore_white: false,
            dominant_weight: 60,
            similarity_threshold: 25.0,
            max_colors: 3,
        }
    }
}

impl ExtractConfig {
    /// Largest palette the median cut quantizer will build.
    pub const MAX_PALETTE: usize = 256;

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if self.palette_size == 0 || self.palette_size > Self::MAX_PALETTE {
            return Err(Error::invalid_parameter("palette_size", self.palette_size));
        }
        if self.quality == 0 {
            return Err(Error::invalid_parameter("quality", self.quality));
        }
        if self.dominant_weight == 0 {
            return Err(Error::invalid_parameter("dominant_weight", self.dominant_weight));
        }
        if !self.similarity_threshold.is_finite() || self.similarity_threshold < 0.0 {
            return Err(Error::invalid_parameter(
                "similarity_threshold",
                self.similarity_threshold,
            ));
        }
        if self.max_colors == 0 || self.max_colors > 100 {
            return Err(Error::invalid_parameter("max_colors", self.max_colors));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        ExtractConfig::default().validate().unwrap();
    }

    #[test]
    fn test_rejects_zero_values() {
        let cases = [
            ExtractConfig { palette_size: 0, ..Default::default() },
            ExtractConfig { quality: 0, ..Default::default() },
            ExtractConfig { max_colors: 0, ..Default::default() },
            ExtractConfig { dominant_weight: 0, ..Default::default() },
            ExtractConfig { similarity_threshold: f64::NAN, ..Default::default() },
        ];
        for cfg in cases {
            assert!(cfg.validate().is_err(), "{:?}", cfg);
        }
    }

    #[test]
    fn test_yaml_partial() {
        let cfg: ExtractConfig =
            serde_yaml::from_str("quality: 1\nignore_white: true\n").unwrap();
        assert_eq!(cfg.quality, 1);
        assert!(cfg.ignore_white);
        assert_eq!(cfg.dominant_weight, 60);
    }
}
