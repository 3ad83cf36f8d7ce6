//! Integration tests for the paint matcher crates.
//!
//! End-to-end checks that a photo buffer flows through extraction and
//! matching, that catalogs load from disk, and that reports serialize
//! with the field names clients expect.

mod reference;

#[cfg(test)]
mod tests {
    use paint_core::{ExtractedColor, PixelBuffer, Rgb8};
    use paint_extract::{ColorExtractor, ExtractConfig, MedianCut};
    use paint_match::{
        analyze, get_paint_matches, Catalog, MatchConfig, ResultStore, StoredAnalysis,
    };
    use tempfile::tempdir;

    const CATALOG_YAML: &str = r##"
vendors:
  - name: Dulux
    colours:
      - { name: Tomato Red, code: DLX-001, hex: "#FF6347", url: "https://example.com/dlx-001" }
      - { name: Pure Brilliant White, code: DLX-002, hex: "#FFFFFF" }
      - { name: Night Jewels, code: DLX-003, hex: "#1B1B3A" }
      - { name: Typo, code: DLX-004, hex: "FFF" }
  - name: Valspar
    colours:
      - { name: Chalk, code: VS-10, hex: "#F4F1EA" }
      - { name: Signal Red, code: VS-11, hex: "#E00000" }
  - name: Empty Co
    colours: []
"##;

    /// Photo: left 3/4 red wall, right 1/4 white trim.
    fn wall_photo(width: u32, height: u32) -> PixelBuffer {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _y in 0..height {
            for x in 0..width {
                let c = if x < width * 3 / 4 {
                    Rgb8::new(200, 16, 16)
                } else {
                    Rgb8::WHITE
                };
                data.extend_from_slice(&c.to_array());
            }
        }
        PixelBuffer::from_rgb(width, height, data).unwrap()
    }

    fn write_catalog(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("catalog.yaml");
        std::fs::write(&path, CATALOG_YAML).unwrap();
        path
    }

    /// Full pipeline: decode-free buffer -> extract -> match.
    #[test]
    fn test_photo_to_paints() {
        let dir = tempdir().unwrap();
        let catalog = Catalog::from_file(write_catalog(dir.path())).unwrap();
        assert_eq!(catalog.validate().len(), 1);

        let pixels = wall_photo(64, 40);
        let config = ExtractConfig { quality: 1, ..Default::default() };
        let analysis = analyze(
            &pixels,
            &MedianCut::from_config(&config),
            &config,
            &catalog,
            &MatchConfig::default(),
        )
        .unwrap();

        assert_eq!(analysis.extracted.len(), 2);
        assert_eq!(
            analysis.extracted.iter().map(|c| u32::from(c.percentage)).sum::<u32>(),
            100
        );
        assert!(analysis.extracted[0].percentage > analysis.extracted[1].percentage);

        let red = &analysis.matches[0];
        let vendors: Vec<_> = red.vendor_matches.iter().map(|g| g.vendor.as_str()).collect();
        assert_eq!(vendors, ["Dulux", "Valspar", "Empty Co"]);
        assert_eq!(red.vendor_matches[0].matches.len(), 3);
        assert_eq!(red.vendor_matches[1].matches[0].entry.code, "VS-11");
        assert!(red.vendor_matches[2].matches.is_empty());

        let white = &analysis.matches[1];
        assert_eq!(white.vendor_matches[0].matches[0].entry.code, "DLX-002");
        assert_eq!(white.vendor_matches[1].matches[0].entry.code, "VS-10");
    }

    /// Extraction and matching are pure: same input, same output.
    #[test]
    fn test_deterministic() {
        let catalog = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
        let pixels = wall_photo(97, 53);
        let run = || {
            analyze(
                &pixels,
                &MedianCut::new(),
                &ExtractConfig::default(),
                &catalog,
                &MatchConfig::default(),
            )
            .unwrap()
        };
        let first = run();
        for _ in 0..4 {
            assert_eq!(run(), first);
        }
    }

    /// Stored extraction is matched later against a catalog.
    #[test]
    fn test_store_then_match() {
        let pixels = PixelBuffer::filled(16, 16, Rgb8::new(0xF4, 0xF1, 0xEA)).unwrap();
        let extracted = ColorExtractor::new().extract(&pixels).unwrap();

        let mut store = ResultStore::new();
        store.insert("req-42", StoredAnalysis::new("hallway.jpg", extracted));

        let catalog = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
        let stored = store.get("req-42").unwrap();
        let results =
            get_paint_matches(&stored.extracted, &catalog, &MatchConfig::new(1)).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].color.percentage, 100);
        let chalk = &results[0].vendor_matches[1].matches[0];
        assert_eq!(chalk.entry.code, "VS-10");
        assert!(chalk.match_percentage >= 95);
    }

    /// Report JSON uses the client field names.
    #[test]
    fn test_report_json() {
        let catalog = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
        let colors = [ExtractedColor::new("#FF0000", 100)];
        let results = get_paint_matches(&colors, &catalog, &MatchConfig::new(2)).unwrap();
        let json = serde_json::to_value(&results).unwrap();

        let dulux = &json[0]["vendorMatches"][0];
        assert_eq!(dulux["vendor"], "Dulux");
        let top = &dulux["matches"][0];
        assert_eq!(top["name"], "Tomato Red");
        assert_eq!(top["code"], "DLX-001");
        assert_eq!(top["hex"], "#FF6347");
        assert_eq!(top["url"], "https://example.com/dlx-001");
        assert_eq!(top["matchPercentage"], 52);
        assert!(dulux["matches"][1].get("url").is_none());
        assert_eq!(json[0]["color"]["percentage"], 100);
    }

    /// JSON catalog on disk behaves like the YAML one.
    #[test]
    fn test_json_catalog_file() {
        let dir = tempdir().unwrap();
        let yaml = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, serde_json::to_string(&yaml).unwrap()).unwrap();
        assert_eq!(Catalog::from_file(&path).unwrap(), yaml);
    }

    /// Fully transparent photo cannot be analyzed.
    #[test]
    fn test_transparent_photo_fails() {
        let pixels = PixelBuffer::from_rgba(8, 8, vec![0u8; 8 * 8 * 4]).unwrap();
        let err = ColorExtractor::new().extract(&pixels).unwrap_err();
        assert!(err.is_extraction_failure());
    }
}
