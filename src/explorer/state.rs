use tracing::{debug, trace};

use crate::config::ExplorerConfig;
use crate::filter::{FilterCriteria, compute_view, compute_view_over};
use crate::model::{Bucket, Category, Parameter, ViewMode, ViewResult, ViewSnapshot};
use crate::navigation::{find_top_level_mut, resolve_category_by_vec, split_path};
use crate::seed::{generate_parameters, make_rng};

use super::intent::Intent;

/// Root breadcrumb segment.
pub const ROOT_CRUMB: &str = "All";

/// View-state holder for the parameter explorer.
///
/// Owns the immutable parameter collection plus the current criteria,
/// breadcrumb, view and detailed parameter. Every filtering decision is
/// delegated to [`compute_view`]; the methods here only move criteria fields
/// and the breadcrumb around.
#[derive(Debug, Clone)]
pub struct Explorer {
    parameters: Vec<Parameter>,
    categories: Vec<Category>,
    criteria: FilterCriteria,
    breadcrumb: Vec<String>,
    view: ViewResult,
    selected: Option<Parameter>,
    bucket_threshold: usize,
}

impl Explorer {
    /// Create an explorer over an existing collection. The initial view shows
    /// every parameter as rows, regardless of the threshold.
    pub fn new(parameters: Vec<Parameter>, categories: Vec<Category>, bucket_threshold: usize) -> Self {
        let view = ViewResult::Rows(parameters.clone());
        Self {
            parameters,
            categories,
            criteria: FilterCriteria::default(),
            breadcrumb: vec![ROOT_CRUMB.to_string()],
            view,
            selected: None,
            bucket_threshold,
        }
    }

    /// Generate the seed dataset described by `config` and wrap it.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        let (mut rng, seed) = make_rng(config.seed);
        let parameters = generate_parameters(config, &mut rng);
        tracing::info!(seed, count = parameters.len(), "generated parameter set");
        Self::new(parameters, config.categories.clone(), config.bucket_threshold)
    }

    // ── accessors ───────────────────────────────────────────────────────────

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn breadcrumb(&self) -> &[String] {
        &self.breadcrumb
    }

    pub fn view(&self) -> &ViewResult {
        &self.view
    }

    /// Result sizes above this show buckets instead of rows.
    pub fn bucket_threshold(&self) -> usize {
        self.bucket_threshold
    }

    /// Rows currently listed; empty while buckets are shown.
    pub fn filtered_params(&self) -> &[Parameter] {
        self.view.rows()
    }

    pub fn buckets(&self) -> &[Bucket] {
        self.view.buckets()
    }

    pub fn show_buckets(&self) -> bool {
        self.view.is_buckets()
    }

    pub fn selected_parameter(&self) -> Option<&Parameter> {
        self.selected.as_ref()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            breadcrumb: self.breadcrumb.clone(),
            mode: self.view.mode(),
            row_count: self.filtered_params().len(),
            rows: self.filtered_params().to_vec(),
            buckets: self.buckets().to_vec(),
            selected: self.selected.clone(),
        }
    }

    // ── actions ─────────────────────────────────────────────────────────────

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.apply_filters();
    }

    pub fn set_editable_only(&mut self, flag: bool) {
        self.criteria.editable_only = flag;
        self.apply_filters();
    }

    /// Select a leaf category by its `/`-separated tree path, e.g.
    /// "Performance/CPU". Unknown names simply match nothing.
    pub fn select_category(&mut self, path: &str) {
        // Empty segments are dropped, so "Performance/" selects "Performance"
        // rather than clearing the category.
        let segments = split_path(path);
        self.criteria.selected_category = segments.last().map(|s| s.to_string()).unwrap_or_default();
        if !segments.is_empty()
            && !resolve_category_by_vec(&self.categories, &segments).is_some_and(Category::is_leaf)
        {
            debug!(path, "category path does not resolve to a leaf");
        }
        self.breadcrumb = std::iter::once(ROOT_CRUMB)
            .chain(segments)
            .map(str::to_string)
            .collect();
        self.apply_filters();
    }

    /// Apply an intent preset. The category narrowing only shapes this one
    /// recompute; it is not kept in the criteria.
    pub fn apply_intent(&mut self, intent: Intent) {
        if intent.clears_selected_category() {
            self.criteria.selected_category.clear();
        }
        self.breadcrumb = vec!["Intent".to_string(), intent.label().to_string()];
        let base = self.parameters.iter().filter(|p| intent.includes(&p.category));
        self.view = compute_view_over(base, &self.criteria, self.bucket_threshold);
        self.log_view("apply_intent");
    }

    /// Clear every criterion and list the full collection as rows.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.breadcrumb = vec![ROOT_CRUMB.to_string()];
        self.view = ViewResult::Rows(self.parameters.clone());
        self.log_view("reset_filters");
    }

    /// Narrow to parameters carrying `bucket` (matched lower-cased). May land
    /// in bucket view again if the tag is still too broad.
    pub fn select_bucket(&mut self, bucket: &str) {
        self.criteria.active_bucket = bucket.to_lowercase();
        self.breadcrumb = vec![
            ROOT_CRUMB.to_string(),
            "Bucket".to_string(),
            bucket.to_string(),
        ];
        self.apply_filters();
    }

    /// Flip `expanded` on a top-level category node. Returns `false` if no
    /// such node exists. Does not touch the view.
    pub fn toggle_category_node(&mut self, name: &str) -> bool {
        match find_top_level_mut(&mut self.categories, name) {
            Some(node) => {
                let expanded = node.toggle();
                trace!(category = name, expanded, "toggled category node");
                true
            }
            None => false,
        }
    }

    /// Make the parameter with `id` the detailed one. Returns `false` (and
    /// leaves the selection unchanged) if the id is unknown.
    pub fn select_parameter(&mut self, id: &str) -> bool {
        match self.parameters.iter().find(|p| p.id == id) {
            Some(p) => {
                self.selected = Some(p.clone());
                true
            }
            None => false,
        }
    }

    /// Recompute the view from the full collection and current criteria.
    pub fn apply_filters(&mut self) {
        self.view = compute_view(&self.parameters, &self.criteria, self.bucket_threshold);
        self.log_view("apply_filters");
    }

    fn log_view(&self, action: &str) {
        debug!(
            action,
            buckets = self.show_buckets(),
            rows = self.filtered_params().len(),
            bucket_count = self.buckets().len(),
            breadcrumb = ?self.breadcrumb,
            "recomputed view"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explorer() -> Explorer {
        let config = ExplorerConfig {
            seed: Some(7),
            ..Default::default()
        };
        Explorer::from_config(&config)
    }

    #[test]
    fn starts_with_all_rows() {
        let ex = explorer();
        assert_eq!(ex.filtered_params().len(), 1200);
        assert!(!ex.show_buckets());
        assert_eq!(ex.breadcrumb(), ["All"]);
    }

    #[test]
    fn select_parameter_does_not_recompute() {
        let mut ex = explorer();
        ex.set_search_text("Parameter 12");
        let before = ex.view().clone();
        assert!(ex.select_parameter("PARAM_3"));
        assert_eq!(ex.selected_parameter().map(|p| p.id.as_str()), Some("PARAM_3"));
        assert_eq!(ex.view(), &before);
        assert!(!ex.select_parameter("PARAM_0"));
        assert_eq!(ex.selected_parameter().map(|p| p.id.as_str()), Some("PARAM_3"));
    }

    #[test]
    fn threshold_comes_from_config() {
        let config = ExplorerConfig {
            seed: Some(7),
            bucket_threshold: 299,
            ..Default::default()
        };
        let mut ex = Explorer::from_config(&config);
        assert_eq!(ex.bucket_threshold(), 299);
        ex.select_category("Performance/CPU");
        assert!(ex.show_buckets());
        assert_eq!(ex.snapshot().mode, ViewMode::Buckets);
    }

    #[test]
    fn trailing_slash_selects_the_last_named_segment() {
        let mut ex = explorer();
        ex.select_category("Performance/");
        assert_eq!(ex.criteria().selected_category, "Performance");
        assert_eq!(ex.breadcrumb(), ["All", "Performance"]);
        assert!(ex.filtered_params().is_empty());
    }

    #[test]
    fn toggle_only_affects_tree() {
        let mut ex = explorer();
        let before = ex.view().clone();
        assert!(ex.toggle_category_node("Power"));
        assert!(ex.categories()[1].expanded);
        assert!(!ex.toggle_category_node("CPU"));
        assert_eq!(ex.view(), &before);
    }
}
