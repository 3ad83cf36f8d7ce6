//! In-memory store of completed analyses.
//!
//! Results are keyed by caller-chosen request ids so a front end can show
//! the extracted colors first and run matching against them later.

use paint_core::ExtractedColor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// An extraction kept for later matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAnalysis {
    /// Where the photo came from (path, URL, upload name).
    pub image_ref: String,
    /// Colors extracted from the photo.
    pub extracted: Vec<ExtractedColor>,
}

impl StoredAnalysis {
    /// Creates a stored analysis.
    pub fn new(image_ref: impl Into<String>, extracted: Vec<ExtractedColor>) -> Self {
        Self {
            image_ref: image_ref.into(),
            extracted,
        }
    }
}

/// Request id to analysis map.
#[derive(Debug, Default)]
pub struct ResultStore {
    entries: HashMap<String, StoredAnalysis>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `analysis` under `id`, returning the analysis it replaced.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        analysis: StoredAnalysis,
    ) -> Option<StoredAnalysis> {
        let id = id.into();
        debug!(id = %id, colors = analysis.extracted.len(), "storing analysis");
        self.entries.insert(id, analysis)
    }

    /// Looks up an analysis.
    pub fn get(&self, id: &str) -> Option<&StoredAnalysis> {
        self.entries.get(id)
    }

    /// Removes and returns an analysis.
    pub fn remove(&mut self, id: &str) -> Option<StoredAnalysis> {
        let removed = self.entries.remove(id);
        if removed.is_some() {
            debug!(id, "removed analysis");
        }
        removed
    }

    /// Number of stored analyses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every stored analysis.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
