//! CLI configuration file.
//!
//! ```yaml
//! extract:
//!   quality: 5
//!   ignore_white: true
//! matching:
//!   max_matches: 5
//! ```

use anyhow::{bail, Context, Result};
use paint_extract::ExtractConfig;
use paint_match::MatchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings shared by all commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Extraction parameters.
    pub extract: ExtractConfig,
    /// Matching parameters.
    pub matching: MatchConfig,
}

impl AppConfig {
    /// Loads and validates a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parses and validates YAML config text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.extract.validate()?;
        if config.matching.max_matches == 0 {
            bail!("matching.max_matches must be at least 1");
        }
        Ok(config)
    }
}
