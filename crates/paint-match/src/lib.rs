//! # paint-match
//!
//! Suggests catalog paints for the colors extracted from a photo.
//!
//! Each extracted color is converted to CIE L\*a\*b\* and compared with
//! every catalog entry by CIE76 ΔE. Scores are
//! `round(max(0, 100 - 1.5 * ΔE))`; per vendor the best few are kept.
//!
//! # Quick Start
//!
//! ```rust
//! use paint_core::ExtractedColor;
//! use paint_match::{get_paint_matches, Catalog, MatchConfig};
//!
//! let catalog = Catalog::from_yaml_str(r##"
//! vendors:
//!   - name: Dulux
//!     colours:
//!       - { name: Tomato, code: DLX1, hex: "#FF6347" }
//! "##).unwrap();
//!
//! let colors = [ExtractedColor::new("#FF0000", 100)];
//! let results = get_paint_matches(&colors, &catalog, &MatchConfig::default()).unwrap();
//! assert_eq!(results[0].vendor_matches[0].matches[0].match_percentage, 52);
//! ```
//!
//! # Modules
//!
//! - [`Catalog`] - vendors and entries, loaded from YAML or JSON
//! - [`PaintMatcher`] - precomputed catalog, parallel over colors
//! - [`analyze`] - extraction followed by matching
//! - [`ResultStore`] - analyses kept by request id
//!
//! # Dependencies
//!
//! - [`paint-core`] - colors and errors
//! - [`paint-color`] - Lab conversion and scoring
//! - [`paint-extract`] - extraction for [`analyze`]
//! - [`rayon`] - per-color parallelism
//! - [`serde_yaml`], [`serde_json`] - catalog files and reports
//!
//! # Used By
//!
//! - `paint-cli` - `match` and `catalog` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod catalog;
mod matcher;
mod pipeline;
mod store;

pub use catalog::{Catalog, PaintCatalogEntry, Vendor};
pub use matcher::{
    find_closest_matches, get_paint_matches, ColorMatchResult, MatchConfig, PaintMatch,
    PaintMatcher, VendorMatchGroup,
};
pub use pipeline::{analyze, Analysis};
pub use store::{ResultStore, StoredAnalysis};
