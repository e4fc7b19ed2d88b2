//! Dataset and explorer configuration.
//!
//! The defaults reproduce the built-in demo dataset: 1200 parameters cycling
//! through the CPU, Memory, IO and Thermal leaves, every 8th one editable, and
//! a 200-row bucket threshold. A JSON file may override any subset of fields.

use anyhow::{Context, Result, ensure};
use camino::Utf8Path;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::filter::DEFAULT_BUCKET_THRESHOLD;
use crate::model::Category;
use crate::navigation::{is_known_leaf, leaf_names};

static DEFAULT_CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category::group(
            "Performance",
            true,
            vec![
                Category::leaf("CPU"),
                Category::leaf("Memory"),
                Category::leaf("IO"),
            ],
        ),
        Category::group("Power", false, vec![Category::leaf("Thermal")]),
    ]
});

static DEFAULT_TAGS: Lazy<IndexMap<String, Vec<String>>> = Lazy::new(|| {
    [
        ("CPU", ["performance", "latency"]),
        ("Memory", ["performance", "capacity"]),
        ("IO", ["throughput", "latency"]),
        ("Thermal", ["power", "safety"]),
    ]
    .into_iter()
    .map(|(cat, tags)| {
        (
            cat.to_string(),
            tags.iter().map(|t| t.to_string()).collect::<Vec<_>>(),
        )
    })
    .collect()
});

/// The built-in two-level category tree.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES.clone()
}

/// The built-in per-category tag table.
pub fn default_tags() -> IndexMap<String, Vec<String>> {
    DEFAULT_TAGS.clone()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Result sizes strictly above this switch to bucket view.
    pub bucket_threshold: usize,
    /// Number of parameters generated at startup.
    pub parameter_count: usize,
    /// Every n-th parameter (1-based) is editable.
    pub editable_every: usize,
    /// Generated values lie in `[0, value_range)`.
    pub value_range: u64,
    /// RNG seed for generated values; random when absent.
    pub seed: Option<u64>,
    pub categories: Vec<Category>,
    /// Tags assigned to every parameter of a leaf category.
    pub tags: IndexMap<String, Vec<String>>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            bucket_threshold: DEFAULT_BUCKET_THRESHOLD,
            parameter_count: 1200,
            editable_every: 8,
            value_range: 500,
            seed: None,
            categories: default_categories(),
            tags: default_tags(),
        }
    }
}

impl ExplorerConfig {
    /// Parse a config from a JSON file without validating it, so callers can
    /// apply overrides first.
    pub fn read(path: &Utf8Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("Read config {}", path))?;
        let config: ExplorerConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path))?;
        tracing::debug!(%path, "read config");
        Ok(config)
    }

    /// Load a config from a JSON file and validate it.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let config = Self::read(path)?;
        config
            .validate()
            .with_context(|| format!("Invalid config {}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            !leaf_names(&self.categories).is_empty(),
            "category tree has no leaf categories"
        );
        ensure!(self.editable_every > 0, "editable_every must be positive");
        ensure!(self.value_range > 0, "value_range must be positive");
        for (category, tags) in &self.tags {
            ensure!(
                is_known_leaf(&self.categories, category),
                "tag table names unknown category '{}'",
                category
            );
            ensure!(
                tags.iter().all(|t| *t == t.to_lowercase()),
                "tags for '{}' must be lower-case",
                category
            );
        }
        Ok(())
    }
}
