//! Catalog inspection command.

use crate::CatalogArgs;
use anyhow::{bail, Result};

/// Runs the catalog command, summarizing vendors and malformed entries.
///
/// Fails if any entry is malformed so the command can gate catalog updates.
pub fn run(args: CatalogArgs, verbose: bool) -> Result<()> {
    let catalog = super::load_catalog(&args.input)?;

    println!("{}", args.input.display());
    println!("  Vendors:  {}", catalog.len());
    println!("  Entries:  {}", catalog.entry_count());

    for vendor in &catalog.vendors {
        println!("  {} ({})", vendor.name, vendor.colours.len());
        if args.list || verbose {
            for entry in &vendor.colours {
                println!("    {}  {}  {}", entry.code, entry.hex, entry.name);
            }
        }
    }

    let issues = catalog.validate();
    if !issues.is_empty() {
        for issue in &issues {
            println!("  ! {}", issue);
        }
        bail!("{} malformed catalog entries", issues.len());
    }
    Ok(())
}
