//! CLI command implementations

pub mod catalog;
pub mod compare;
pub mod extract;
pub mod match_cmd;

use anyhow::{Context, Result};
use paint_core::{ExtractedColor, PixelBuffer};
use paint_match::Catalog;
use serde::Serialize;
use std::path::Path;

/// Load photo from path
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    crate::decode::load_photo(path)
}

/// Load paint catalog from path
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::from_file(path).with_context(|| format!("Failed to load catalog: {}", path.display()))
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format an extracted color as `#rrggbb  NN%`
pub fn format_color(color: &ExtractedColor) -> String {
    format!("{}  {:>3}%", color.hex, color.percentage)
}
