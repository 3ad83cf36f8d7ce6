//! # paint-extract
//!
//! Reduces a decoded photo to at most three representative colors with
//! percentage weights.
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer --Quantizer--> {dominant, palette[..5]}
//!             --screen-----> dominant + candidates >= 25 apart (RGB)
//!             --weights----> 60, max(5, 30 - 5i)
//!             --normalize--> <= 3 ExtractedColor, sum 100, descending
//! ```
//!
//! The quantizer is injected ([`Quantizer`]); [`MedianCut`] is the default.
//! Tests and alternative front ends can pass any closure of shape
//! `Fn(&PixelBuffer, usize) -> Result<Quantized>`.
//!
//! # Usage
//!
//! ```rust
//! use paint_core::{PixelBuffer, Rgb8};
//! use paint_extract::{ColorExtractor, ExtractConfig};
//!
//! let pixels = PixelBuffer::filled(64, 48, Rgb8::new(222, 214, 196)).unwrap();
//! let extractor = ColorExtractor::from_config(ExtractConfig::default());
//! let colors = extractor.extract(&pixels).unwrap();
//! assert_eq!(colors[0].percentage, 100);
//! ```
//!
//! # Dependencies
//!
//! - [`paint-core`] - pixel buffers, colors, errors
//! - [`paint-color`] - RGB distance for duplicate screening
//! - [`rayon`] - parallel histogram construction
//! - [`tracing`] - pipeline diagnostics
//!
//! # Used By
//!
//! - `paint-match` - combined analyze pipeline
//! - `paint-cli` - `extract` and `match` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod extractor;
mod median_cut;
mod quantize;

pub use config::ExtractConfig;
pub use extractor::{
    candidate_weight, extract_colors, normalize, screen_palette, ColorExtractor, WeightedColor,
    FIRST_CANDIDATE_WEIGHT, MIN_CANDIDATE_WEIGHT, WEIGHT_STEP,
};
pub use median_cut::MedianCut;
pub use quantize::{Quantized, Quantizer};
