//! Command-line surface of the `paramscope` binary: argument parsing, config
//! overrides and replay of filter actions against an [`Explorer`].

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;

use crate::config::ExplorerConfig;
use crate::explorer::{Explorer, Intent};

#[derive(Parser, Debug, Clone)]
#[command(name = "paramscope", author, version, about = "Filter the seed parameter set and print the resulting view as JSON", long_about = None)]
pub struct Cli {
    /// JSON config describing the dataset and bucket threshold
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// RNG seed for parameter values
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of parameters to generate
    #[arg(long)]
    pub count: Option<usize>,

    /// Result size above which buckets are shown instead of rows
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Category tree path to select, e.g. "Performance/CPU"
    #[arg(long)]
    pub category: Option<String>,

    /// Case-insensitive substring of the parameter name
    #[arg(long)]
    pub search: Option<String>,

    /// Only list editable parameters
    #[arg(long)]
    pub editable_only: bool,

    /// Intent preset: "performance" or "power"
    #[arg(long)]
    pub intent: Option<Intent>,

    /// Bucket (tag) to narrow by; may be repeated
    #[arg(long = "bucket", value_name = "TAG")]
    pub buckets: Vec<String>,

    /// Parameter id to show in detail
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Reset all filters after the other actions
    #[arg(long)]
    pub reset: bool,

    /// Print the category tree instead of a view
    #[arg(long)]
    pub tree: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Read the config file (or defaults), apply `--seed`, `--count` and
    /// `--threshold`, then validate the result once.
    pub fn load_config(&self) -> Result<ExplorerConfig> {
        let mut config = match &self.config {
            Some(path) => ExplorerConfig::read(path)?,
            None => ExplorerConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(count) = self.count {
            config.parameter_count = count;
        }
        if let Some(threshold) = self.threshold {
            config.bucket_threshold = threshold;
        }
        match &self.config {
            Some(path) => config
                .validate()
                .with_context(|| format!("Invalid config {}", path))?,
            None => config.validate().context("Invalid configuration")?,
        }
        Ok(config)
    }

    /// Replay the requested actions in a fixed order: category, search,
    /// editable, intent, buckets, select, reset.
    ///
    /// Returns `false` if `--select` named an id that does not exist.
    pub fn replay(&self, explorer: &mut Explorer) -> bool {
        if let Some(path) = &self.category {
            explorer.select_category(path);
        }
        if let Some(text) = &self.search {
            explorer.set_search_text(text.as_str());
        }
        if self.editable_only {
            explorer.set_editable_only(true);
        }
        if let Some(intent) = self.intent {
            explorer.apply_intent(intent);
        }
        for bucket in &self.buckets {
            explorer.select_bucket(bucket);
        }
        let mut selected = true;
        if let Some(id) = &self.select {
            if !explorer.select_parameter(id) {
                tracing::warn!(id = %id, "no parameter with this id");
                selected = false;
            }
        }
        if self.reset {
            explorer.reset_filters();
        }
        selected
    }

    /// Produce the JSON the binary prints: the category tree for `--tree`,
    /// otherwise the snapshot after replay.
    pub fn run(&self) -> Result<String> {
        let config = self.load_config()?;
        if self.tree {
            return Ok(serde_json::to_string_pretty(&config.categories)?);
        }
        let mut explorer = Explorer::from_config(&config);
        self.replay(&mut explorer);
        Ok(serde_json::to_string_pretty(&explorer.snapshot())?)
    }
}
