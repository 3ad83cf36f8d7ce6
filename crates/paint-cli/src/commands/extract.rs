//! Color extraction command.

use crate::config::AppConfig;
use crate::ExtractArgs;
use anyhow::Result;
use paint_extract::{ColorExtractor, ExtractConfig};
use tracing::info;

/// Runs the extract command, printing the representative colors.
pub fn run(args: ExtractArgs, config: &AppConfig, verbose: bool) -> Result<()> {
    let extract_config = ExtractConfig {
        quality: args.quality.unwrap_or(config.extract.quality),
        ..config.extract.clone()
    };

    let pixels = super::load_image(&args.input)?;
    info!(input = %args.input.display(), quality = extract_config.quality, "Extracting colors");

    let colors = ColorExtractor::from_config(extract_config).extract(&pixels)?;

    if args.json {
        return super::print_json(&colors);
    }

    if verbose {
        println!("{} ({}x{})", args.input.display(), pixels.width(), pixels.height());
    }
    for color in &colors {
        println!("{}", super::format_color(color));
    }
    Ok(())
}
