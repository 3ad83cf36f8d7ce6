//! Static paint catalogs.
//!
//! A [`Catalog`] is an ordered list of vendors, each with an ordered list
//! of [`PaintCatalogEntry`]. Order is significant: match reports list
//! vendors in catalog order and break score ties by entry order.
//!
//! # File format
//!
//! YAML or JSON with the same shape:
//!
//! ```yaml
//! vendors:
//!   - name: Dulux
//!     colours:
//!       - { name: Tomato Red, code: DLX1, hex: "#FF6347", url: "https://example.com/dlx1" }
//!       - { name: Chalk, code: DLX2, hex: "#F4F1EA" }
//! ```
//!
//! `colors` is accepted as an alias of `colours`.

use paint_core::{Error, HexColor, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One paint color offered by a vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintCatalogEntry {
    /// Marketing name
    pub name: String,
    /// Vendor product code
    pub code: String,
    /// `#RRGGBB` swatch color as stored; may be malformed
    pub hex: String,
    /// Product page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PaintCatalogEntry {
    /// Creates an entry without a product URL.
    pub fn new(name: impl Into<String>, code: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            hex: hex.into(),
            url: None,
        }
    }

    /// Sets the product URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A paint vendor and its colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor name as shown in reports
    pub name: String,
    /// Colors in declaration order
    #[serde(alias = "colors", default)]
    pub colours: Vec<PaintCatalogEntry>,
}

impl Vendor {
    /// Creates a vendor.
    pub fn new(name: impl Into<String>, colours: Vec<PaintCatalogEntry>) -> Self {
        Self {
            name: name.into(),
            colours,
        }
    }
}

/// Ordered, read-only collection of vendors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Vendors in declaration order
    #[serde(default)]
    pub vendors: Vec<Vendor>,
}

impl Catalog {
    /// Creates a catalog from vendors.
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self { vendors }
    }

    /// Parses a YAML catalog.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::parse(format!("catalog YAML: {}", e)))
    }

    /// Parses a JSON catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(format!("catalog JSON: {}", e)))
    }

    /// Loads a catalog file. `.json` is parsed as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        debug!(
            path = %path.display(),
            vendors = catalog.vendors.len(),
            entries = catalog.entry_count(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Number of vendors.
    #[inline]
    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    /// `true` if there are no vendors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    /// Total number of entries across vendors.
    pub fn entry_count(&self) -> usize {
        self.vendors.iter().map(|v| v.colours.len()).sum()
    }

    /// Looks up a vendor by exact name.
    pub fn vendor(&self, name: &str) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.name == name)
    }

    /// Lists entries whose hex cannot be parsed.
    ///
    /// Each item is an [`Error::MalformedCatalogEntry`]. Matching still works
    /// with such entries present; they simply score 0.
    pub fn validate(&self) -> Vec<Error> {
        self.vendors
            .iter()
            .flat_map(|v| {
                v.colours
                    .iter()
                    .filter(|e| HexColor::parse(&e.hex).is_err())
                    .map(move |e| Error::malformed_entry(&v.name, &e.code, &e.hex))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paint_core::ErrorKind;

    const YAML: &str = r##"
vendors:
  - name: Dulux
    colours:
      - { name: Tomato, code: DLX1, hex: "#FF6347", url: "https://example.com/dlx1" }
      - { name: Broken, code: DLX2, hex: "#12345" }
  - name: Valspar
    colors:
      - { name: Chalk, code: V1, hex: "f4f1ea" }
"##;

    #[test]
    fn test_yaml_order_and_alias() {
        let cat = Catalog::from_yaml_str(YAML).unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(cat.vendors[0].name, "Dulux");
        assert_eq!(cat.vendors[1].colours[0].code, "V1");
        assert_eq!(cat.entry_count(), 3);
        assert_eq!(
            cat.vendors[0].colours[0].url.as_deref(),
            Some("https://example.com/dlx1")
        );
        assert!(cat.vendor("Valspar").is_some());
        assert!(cat.vendor("valspar").is_none());
    }

    #[test]
    fn test_validate_reports_malformed() {
        let cat = Catalog::from_yaml_str(YAML).unwrap();
        let issues = cat.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind(), ErrorKind::MalformedCatalogEntry);
        assert!(issues[0].to_string().contains("Dulux/DLX2"));
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let cat = Catalog::new(vec![Vendor::new(
            "Dulux",
            vec![PaintCatalogEntry::new("Tomato", "DLX1", "#FF6347")],
        )]);
        let json = serde_json::to_string(&cat).unwrap();
        assert!(!json.contains("url"));
        assert_eq!(Catalog::from_json_str(&json).unwrap(), cat);
    }

    #[test]
    fn test_parse_errors() {
        let err = Catalog::from_yaml_str("vendors: [ {name: 1, colours: 7} ]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        let err = Catalog::from_json_str("{").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_from_file_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let yaml_path = dir.path().join("catalog.yaml");
        std::fs::write(&yaml_path, YAML).unwrap();
        assert_eq!(Catalog::from_file(&yaml_path).unwrap().len(), 2);

        let json_path = dir.path().join("catalog.JSON");
        std::fs::write(&json_path, r#"{"vendors":[{"name":"A","colours":[]}]}"#).unwrap();
        assert_eq!(Catalog::from_file(&json_path).unwrap().vendors[0].name, "A");

        let err = Catalog::from_file(dir.path().join("missing.yaml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
