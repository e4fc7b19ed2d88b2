//! Parameter filter engine.
//!
//! [`compute_view`] is a pure function of the parameter collection, the
//! [`FilterCriteria`] and the bucket threshold. It never mutates its inputs,
//! so the same inputs always produce the same view.
//!
//! # Usage
//!
//! ```rust,ignore
//! use paramscope::filter::{compute_view, FilterCriteria};
//!
//! let criteria = FilterCriteria::default().with_search("parameter 1");
//! let view = compute_view(&params, &criteria, 200);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Bucket, Parameter, ViewResult};

/// Result sizes above this switch the view to buckets.
pub const DEFAULT_BUCKET_THRESHOLD: usize = 200;

/// Filter criteria applied on every recompute. Empty strings and `false`
/// mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the parameter name.
    pub search_text: String,
    pub editable_only: bool,
    /// Exact leaf category name.
    pub selected_category: String,
    /// Lower-cased tag name.
    pub active_bucket: String,
}

impl FilterCriteria {
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_editable_only(mut self, flag: bool) -> Self {
        self.editable_only = flag;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.selected_category = category.into();
        self
    }

    /// Set the active bucket; the name is lower-cased to match stored tags.
    pub fn with_bucket(mut self, bucket: &str) -> Self {
        self.active_bucket = bucket.to_lowercase();
        self
    }

    /// True if every field is at its "no constraint" value.
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// All four predicates must hold.
    pub fn matches(&self, p: &Parameter) -> bool {
        matches_search(p, &self.search_text)
            && matches_editable(p, self.editable_only)
            && matches_category(p, &self.selected_category)
            && matches_bucket(p, &self.active_bucket)
    }
}

pub fn matches_search(p: &Parameter, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    p.name.to_lowercase().contains(&search_text.to_lowercase())
}

pub fn matches_editable(p: &Parameter, editable_only: bool) -> bool {
    !editable_only || p.editable
}

/// Categories are canonical strings, so this is an exact, case-sensitive match.
pub fn matches_category(p: &Parameter, selected_category: &str) -> bool {
    selected_category.is_empty() || p.category == selected_category
}

pub fn matches_bucket(p: &Parameter, active_bucket: &str) -> bool {
    active_bucket.is_empty() || p.has_tag(&active_bucket.to_lowercase())
}

/// Filter `parameters` and decide between row and bucket mode.
pub fn compute_view(
    parameters: &[Parameter],
    criteria: &FilterCriteria,
    bucket_threshold: usize,
) -> ViewResult {
    compute_view_over(parameters.iter(), criteria, bucket_threshold)
}

/// Like [`compute_view`], but over an arbitrary base set (used by intent
/// presets that pre-narrow the collection).
pub fn compute_view_over<'a, I>(
    parameters: I,
    criteria: &FilterCriteria,
    bucket_threshold: usize,
) -> ViewResult
where
    I: IntoIterator<Item = &'a Parameter>,
{
    let result: Vec<&Parameter> = parameters
        .into_iter()
        .filter(|p| criteria.matches(p))
        .collect();

    if result.len() > bucket_threshold {
        ViewResult::Buckets(create_buckets(result))
    } else {
        ViewResult::Rows(result.into_iter().cloned().collect())
    }
}

/// Tally tag occurrences. Buckets come out in first-seen order; parameters
/// without tags contribute nothing.
pub fn create_buckets<'a, I>(parameters: I) -> Vec<Bucket>
where
    I: IntoIterator<Item = &'a Parameter>,
{
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for p in parameters {
        for tag in &p.tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(tag, count)| Bucket {
            name: tag.to_uppercase(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(i: usize, category: &str, editable: bool, tags: &[&str]) -> Parameter {
        Parameter {
            id: format!("PARAM_{i}"),
            name: format!("Parameter {i}"),
            category: category.to_string(),
            editable,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            value: serde_json::Value::Null,
        }
    }

    #[test]
    fn bucket_tally_counts_every_tag() {
        let params = vec![
            param(1, "CPU", false, &["a", "b"]),
            param(2, "CPU", false, &["a"]),
            param(3, "CPU", false, &["b", "c"]),
        ];
        let buckets = create_buckets(&params);
        assert_eq!(
            buckets,
            vec![
                Bucket { name: "A".into(), count: 2 },
                Bucket { name: "B".into(), count: 2 },
                Bucket { name: "C".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive() {
        let p = param(12, "IO", false, &[]);
        assert!(matches_search(&p, "PARAMETER 12"));
        assert!(matches_search(&p, ""));
        assert!(!matches_search(&p, "parameter 13"));
    }

    #[test]
    fn category_match_is_exact() {
        let p = param(1, "CPU", false, &[]);
        assert!(matches_category(&p, "CPU"));
        assert!(matches_category(&p, ""));
        assert!(!matches_category(&p, "cpu"));
        assert!(!matches_category(&p, "CP"));
    }

    #[test]
    fn bucket_match_lowercases_the_bucket_name() {
        let p = param(1, "CPU", false, &["latency"]);
        assert!(matches_bucket(&p, "LATENCY"));
        assert!(!matches_bucket(&p, "power"));
    }

    #[test]
    fn untagged_parameter_disappears_from_buckets() {
        let mut params: Vec<_> = (1..=3).map(|i| param(i, "CPU", false, &["x"])).collect();
        params.push(param(4, "CPU", false, &[]));
        match compute_view(&params, &FilterCriteria::default(), 3) {
            ViewResult::Buckets(b) => assert_eq!(b, vec![Bucket { name: "X".into(), count: 3 }]),
            other => panic!("expected buckets, got {other:?}"),
        }
    }

    #[test]
    fn unconstrained_default() {
        assert!(FilterCriteria::default().is_unconstrained());
        assert!(!FilterCriteria::default().with_bucket("A").is_unconstrained());
        assert_eq!(FilterCriteria::default().with_bucket("LaTeNcY").active_bucket, "latency");
    }
}
