//! Two-color similarity command.

use crate::CompareArgs;
use anyhow::{Context, Result};
use paint_color::{delta_e76, match_percentage, rgb_to_lab};
use paint_core::HexColor;

/// Runs the compare command, printing ΔE and the match percentage.
pub fn run(args: CompareArgs, verbose: bool) -> Result<()> {
    let a = HexColor::parse(&args.a).with_context(|| format!("Invalid color: {}", args.a))?;
    let b = HexColor::parse(&args.b).with_context(|| format!("Invalid color: {}", args.b))?;

    let (lab_a, lab_b) = (rgb_to_lab(a.rgb()), rgb_to_lab(b.rgb()));
    let distance = delta_e76(lab_a, lab_b);

    if verbose {
        println!("{}  L={:.4} a={:.4} b={:.4}", a, lab_a.l, lab_a.a, lab_a.b);
        println!("{}  L={:.4} a={:.4} b={:.4}", b, lab_b.l, lab_b.a, lab_b.b);
    }
    println!("Delta E:  {:.4}", distance);
    println!("Match:    {}%", match_percentage(distance));
    Ok(())
}
