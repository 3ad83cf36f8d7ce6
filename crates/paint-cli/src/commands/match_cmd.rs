//! Paint matching command.

use crate::config::AppConfig;
use crate::MatchArgs;
use anyhow::Result;
use paint_extract::MedianCut;
use paint_match::{analyze, Analysis, MatchConfig};
use tracing::{info, warn};

/// Runs the match command: extract, then rank each vendor's paints.
pub fn run(args: MatchArgs, config: &AppConfig, verbose: bool) -> Result<()> {
    let catalog = super::load_catalog(&args.catalog)?;
    for issue in catalog.validate() {
        warn!("{}", issue);
    }

    let match_config = MatchConfig::new(args.max_matches.unwrap_or(config.matching.max_matches));
    let pixels = super::load_image(&args.input)?;
    info!(
        input = %args.input.display(),
        vendors = catalog.len(),
        max_matches = match_config.max_matches,
        "Matching paints"
    );

    let quantizer = MedianCut::from_config(&config.extract);
    let analysis = analyze(&pixels, &quantizer, &config.extract, &catalog, &match_config)?;

    if args.json {
        return super::print_json(&analysis);
    }
    print_text(&analysis, verbose);
    Ok(())
}

fn print_text(analysis: &Analysis, verbose: bool) {
    for result in &analysis.matches {
        println!("{}", super::format_color(&result.color));
        for group in &result.vendor_matches {
            println!("  {}", group.vendor);
            if group.matches.is_empty() {
                println!("    (no colours)");
            }
            for m in &group.matches {
                println!(
                    "    {:>3}%  {}  {} ({})",
                    m.match_percentage, m.entry.hex, m.entry.name, m.entry.code
                );
                if verbose {
                    if let Some(url) = &m.entry.url {
                        println!("          {}", url);
                    }
                }
            }
        }
    }
}
