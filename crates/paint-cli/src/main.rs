//! paintmatch - photo to paint color suggestions
//!
//! Extracts up to three representative colors from a photo and ranks
//! catalog paints against them.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod decode;

use config::AppConfig;

#[derive(Parser)]
#[command(name = "paintmatch")]
#[command(author, version, about = "Match photo colors to paint catalogs")]
#[command(long_about = "
Extracts the representative colors of a photo and suggests the closest
paints from vendor catalogs.

Examples:
  paintmatch extract wall.jpg                    # Show extracted colors
  paintmatch extract wall.jpg --json
  paintmatch match wall.jpg -c catalog.yaml      # Suggest paints
  paintmatch match wall.jpg -c catalog.json -n 5 --json
  paintmatch compare '#FF0000' '#FF6347'         # Score two colors
  paintmatch catalog catalog.yaml                # Validate a catalog
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// YAML file with `extract` and `matching` sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract representative colors from a photo
    #[command(visible_alias = "x")]
    Extract(ExtractArgs),

    /// Extract colors and suggest catalog paints
    #[command(visible_alias = "m")]
    Match(MatchArgs),

    /// Score the similarity of two hex colors
    Compare(CompareArgs),

    /// Load a catalog and report malformed entries
    Catalog(CatalogArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Input photo (PNG or JPEG)
    input: PathBuf,

    /// Sampling step override (1 = every pixel)
    #[arg(short, long)]
    quality: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MatchArgs {
    /// Input photo (PNG or JPEG)
    input: PathBuf,

    /// Paint catalog (YAML, or JSON by extension)
    #[arg(short, long)]
    catalog: PathBuf,

    /// Matches per vendor
    #[arg(short = 'n', long)]
    max_matches: Option<usize>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CompareArgs {
    /// First color (#RRGGBB)
    a: String,

    /// Second color (#RRGGBB)
    b: String,
}

#[derive(Args)]
struct CatalogArgs {
    /// Catalog file
    input: PathBuf,

    /// List every entry
    #[arg(short, long)]
    list: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Extract(args) => commands::extract::run(args, &config, cli.verbose),
        Commands::Match(args) => commands::match_cmd::run(args, &config, cli.verbose),
        Commands::Compare(args) => commands::compare::run(args, cli.verbose),
        Commands::Catalog(args) => commands::catalog::run(args, cli.verbose),
    }
}
