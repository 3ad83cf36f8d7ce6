//! Ranking catalog entries by perceptual distance.
//!
//! Every extracted color is converted to Lab once, every catalog entry is
//! converted once per [`PaintMatcher`], and entries are scored with
//! [`match_percentage`] over CIE76 ΔE. Per vendor the best `max_matches`
//! entries are kept, best first, ties in catalog order.

use crate::catalog::{Catalog, PaintCatalogEntry};
use paint_color::{delta_e76, hex_to_lab, match_percentage, Lab};
use paint_core::{ExtractedColor, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Matching parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Matches reported per vendor.
    pub max_matches: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { max_matches: 3 }
    }
}

impl MatchConfig {
    /// Creates a config with the given per-vendor limit. 0 reports vendor
    /// groups without matches.
    pub fn new(max_matches: usize) -> Self {
        Self { max_matches }
    }
}

/// A catalog entry with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintMatch {
    /// The matched entry, copied from the catalog.
    #[serde(flatten)]
    pub entry: PaintCatalogEntry,
    /// Similarity in `0..=100`.
    pub match_percentage: u8,
}

/// Best matches from one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorMatchGroup {
    /// Vendor name
    pub vendor: String,
    /// Matches, best first
    pub matches: Vec<PaintMatch>,
}

/// Matches for one extracted color, one group per vendor in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMatchResult {
    /// The extracted color this result describes.
    pub color: ExtractedColor,
    /// Per-vendor groups.
    pub vendor_matches: Vec<VendorMatchGroup>,
}

/// Ranks `entries` against `target`, keeping the best `max_matches`.
///
/// Entries with a malformed hex score 0. Equal scores keep catalog order.
pub fn find_closest_matches(
    target: Lab,
    entries: &[PaintCatalogEntry],
    max_matches: usize,
) -> Vec<PaintMatch> {
    let labs: Vec<Option<Lab>> = entries.iter().map(|e| hex_to_lab(&e.hex).ok()).collect();
    rank_entries(target, entries, &labs, max_matches)
}

/// `labs[i]` is the precomputed Lab of `entries[i]`, `None` if malformed.
fn rank_entries(
    target: Lab,
    entries: &[PaintCatalogEntry],
    labs: &[Option<Lab>],
    max_matches: usize,
) -> Vec<PaintMatch> {
    debug_assert_eq!(entries.len(), labs.len());
    let mut scored: Vec<PaintMatch> = entries
        .iter()
        .zip(labs)
        .map(|(entry, lab)| {
            let distance = lab.map_or(f64::INFINITY, |lab| delta_e76(target, lab));
            PaintMatch {
                entry: entry.clone(),
                match_percentage: match_percentage(distance),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    scored.truncate(max_matches);
    scored
}

/// Catalog with entry Lab values precomputed.
///
/// Build once per catalog and reuse for many photos.
#[derive(Debug)]
pub struct PaintMatcher<'a> {
    catalog: &'a Catalog,
    labs: Vec<Vec<Option<Lab>>>,
    config: MatchConfig,
}

impl<'a> PaintMatcher<'a> {
    /// Prepares `catalog` for matching.
    ///
    /// Malformed entries are logged once here and kept with a score of 0.
    pub fn new(catalog: &'a Catalog, config: MatchConfig) -> Self {
        let labs = catalog
            .vendors
            .iter()
            .map(|vendor| {
                vendor
                    .colours
                    .iter()
                    .map(|entry| match hex_to_lab(&entry.hex) {
                        Ok(lab) => Some(lab),
                        Err(_) => {
                            warn!(
                                vendor = %vendor.name,
                                code = %entry.code,
                                hex = %entry.hex,
                                "malformed catalog entry, scoring as 0"
                            );
                            None
                        }
                    })
                    .collect()
            })
            .collect();

        debug!(
            vendors = catalog.len(),
            entries = catalog.entry_count(),
            max_matches = config.max_matches,
            "prepared paint matcher"
        );
        Self {
            catalog,
            labs,
            config,
        }
    }

    /// The catalog being matched against.
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Matches each extracted color against every vendor.
    ///
    /// Output order follows `colors`. Fails with
    /// [`paint_core::Error::InvalidColorFormat`] if any extracted hex is
    /// malformed; no partial result is returned.
    pub fn match_colors(&self, colors: &[ExtractedColor]) -> Result<Vec<ColorMatchResult>> {
        let targets = colors
            .iter()
            .map(|c| c.parse_hex().map(|hex| paint_color::rgb_to_lab(hex.rgb())))
            .collect::<Result<Vec<Lab>>>()?;

        let results: Vec<ColorMatchResult> = colors
            .par_iter()
            .zip(targets.par_iter())
            .map(|(color, &target)| self.match_one(color, target))
            .collect();

        debug!(colors = results.len(), "matched colors");
        Ok(results)
    }

    fn match_one(&self, color: &ExtractedColor, target: Lab) -> ColorMatchResult {
        let vendor_matches = self
            .catalog
            .vendors
            .iter()
            .zip(&self.labs)
            .map(|(vendor, labs)| {
                let matches =
                    rank_entries(target, &vendor.colours, labs, self.config.max_matches);
                trace!(
                    color = %color.hex,
                    vendor = %vendor.name,
                    best = matches.first().map(|m| m.match_percentage),
                    "vendor ranked"
                );
                VendorMatchGroup {
                    vendor: vendor.name.clone(),
                    matches,
                }
            })
            .collect();

        ColorMatchResult {
            color: color.clone(),
            vendor_matches,
        }
    }
}

/// One-shot matching of `colors` against `catalog`.
///
/// Equivalent to `PaintMatcher::new(catalog, config).match_colors(colors)`.
pub fn get_paint_matches(
    colors: &[ExtractedColor],
    catalog: &Catalog,
    config: &MatchConfig,
) -> Result<Vec<ColorMatchResult>> {
    PaintMatcher::new(catalog, config.clone()).match_colors(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Vendor;
    use paint_core::{Error, ErrorKind};

    fn entry(code: &str, hex: &str) -> PaintCatalogEntry {
        PaintCatalogEntry::new(format!("Paint {}", code), code, hex)
    }

    fn red_catalog() -> Catalog {
        Catalog::new(vec![
            Vendor::new(
                "Dulux",
                vec![entry("D1", "#FF6347"), entry("D2", "#0000FF"), entry("D3", "#FF0000")],
            ),
            Vendor::new("Valspar", vec![entry("V1", "#FF6347")]),
        ])
    }

    #[test]
    fn test_exact_match_scores_100() {
        let colors = [ExtractedColor::new("#FF0000", 100)];
        let results = get_paint_matches(&colors, &red_catalog(), &MatchConfig::default()).unwrap();

        assert_eq!(results.len(), 1);
        let dulux = &results[0].vendor_matches[0];
        assert_eq!(dulux.vendor, "Dulux");
        assert_eq!(dulux.matches.len(), 3);
        assert_eq!(dulux.matches[0].entry.code, "D3");
        assert_eq!(dulux.matches[0].match_percentage, 100);
        assert_eq!(dulux.matches[1].entry.code, "D1");
        assert_eq!(dulux.matches[2].entry.code, "D2");
    }

    #[test]
    fn test_red_vs_tomato() {
        // dE76(#FF0000, #FF6347) = 31.75
        let colors = [ExtractedColor::new("#FF0000", 100)];
        let catalog = Catalog::new(vec![Vendor::new("Dulux", vec![entry("D1", "#FF6347")])]);
        let results = get_paint_matches(&colors, &catalog, &MatchConfig::default()).unwrap();
        assert_eq!(results[0].vendor_matches[0].matches[0].match_percentage, 52);
    }

    #[test]
    fn test_vendor_order_and_limit() {
        let colors = [
            ExtractedColor::new("#FF0000", 70),
            ExtractedColor::new("#0000ff", 30),
        ];
        let results = get_paint_matches(&colors, &red_catalog(), &MatchConfig::new(1)).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].color.hex, "#FF0000");
        assert_eq!(results[1].color.hex, "#0000ff");
        for result in &results {
            let names: Vec<_> = result.vendor_matches.iter().map(|g| g.vendor.as_str()).collect();
            assert_eq!(names, ["Dulux", "Valspar"]);
            assert!(result.vendor_matches.iter().all(|g| g.matches.len() == 1));
        }
        assert_eq!(results[1].vendor_matches[0].matches[0].entry.code, "D2");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![Vendor::new(
            "Twins",
            vec![entry("A", "#808080"), entry("B", "#808080"), entry("C", "#808080")],
        )]);
        let colors = [ExtractedColor::new("#808080", 100)];
        let results = get_paint_matches(&colors, &catalog, &MatchConfig::new(2)).unwrap();
        let codes: Vec<_> = results[0].vendor_matches[0]
            .matches
            .iter()
            .map(|m| m.entry.code.as_str())
            .collect();
        assert_eq!(codes, ["A", "B"]);
    }

    #[test]
    fn test_malformed_entry_scores_zero() {
        let catalog = Catalog::new(vec![Vendor::new(
            "Mixed",
            vec![entry("BAD", "#GGGGGG"), entry("OK", "#00FF00")],
        )]);
        let colors = [ExtractedColor::new("#00FF00", 100)];
        let results = get_paint_matches(&colors, &catalog, &MatchConfig::default()).unwrap();
        let matches = &results[0].vendor_matches[0].matches;
        assert_eq!(matches[0].entry.code, "OK");
        assert_eq!(matches[0].match_percentage, 100);
        assert_eq!(matches[1].entry.code, "BAD");
        assert_eq!(matches[1].match_percentage, 0);
    }

    #[test]
    fn test_invalid_extracted_hex_fails() {
        let colors = [
            ExtractedColor::new("#FF0000", 60),
            ExtractedColor::new("red", 40),
        ];
        let err = get_paint_matches(&colors, &red_catalog(), &MatchConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(matches!(err, Error::InvalidColorFormat { .. }));
    }

    #[test]
    fn test_empty_inputs() {
        let colors = [ExtractedColor::new("#FF0000", 100)];
        let results = get_paint_matches(&colors, &Catalog::default(), &MatchConfig::default())
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].vendor_matches.is_empty());

        let empty_vendor = Catalog::new(vec![Vendor::new("Empty", vec![])]);
        let results = get_paint_matches(&colors, &empty_vendor, &MatchConfig::default()).unwrap();
        assert!(results[0].vendor_matches[0].matches.is_empty());

        let results = get_paint_matches(&[], &red_catalog(), &MatchConfig::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_zero_limit_gives_empty_groups() {
        let colors = [ExtractedColor::new("#FF0000", 100)];
        let results = get_paint_matches(&colors, &red_catalog(), &MatchConfig::new(0)).unwrap();
        assert_eq!(results.len(), 1);
        let groups = &results[0].vendor_matches;
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].vendor, "Dulux");
        assert!(groups.iter().all(|g| g.matches.is_empty()));
    }

    #[test]
    fn test_find_closest_matches_direct() {
        let entries = [entry("BAD", "nope"), entry("T", "#FF6347"), entry("R", "#FF0000")];
        let target = hex_to_lab("#FF0000").unwrap();

        let matches = find_closest_matches(target, &entries, 5);
        let codes: Vec<_> = matches.iter().map(|m| m.entry.code.as_str()).collect();
        assert_eq!(codes, ["R", "T", "BAD"]);
        assert_eq!(matches[0].match_percentage, 100);
        assert_eq!(matches[1].match_percentage, 52);
        assert_eq!(matches[2].match_percentage, 0);

        assert_eq!(find_closest_matches(target, &entries, 1).len(), 1);
        assert!(find_closest_matches(target, &entries, 0).is_empty());
    }

    #[test]
    fn test_report_json_shape() {
        let colors = [ExtractedColor::new("#FF0000", 100)];
        let catalog = Catalog::new(vec![Vendor::new(
            "Dulux",
            vec![entry("D1", "#FF6347").with_url("https://example.com/d1")],
        )]);
        let results = get_paint_matches(&colors, &catalog, &MatchConfig::default()).unwrap();
        let json = serde_json::to_value(&results).unwrap();

        let first = &json[0];
        assert_eq!(first["color"]["hex"], "#FF0000");
        assert_eq!(first["vendorMatches"][0]["vendor"], "Dulux");
        let m = &first["vendorMatches"][0]["matches"][0];
        assert_eq!(m["code"], "D1");
        assert_eq!(m["url"], "https://example.com/d1");
        assert_eq!(m["matchPercentage"], 52);
    }
}
