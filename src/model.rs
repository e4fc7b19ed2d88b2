use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Category
// ────────────────────────────────────────────────────────────────────────────

/// A named grouping node in the category tree.
///
/// The explorer uses a two-level tree: top-level groups (e.g. "Performance")
/// whose children are the leaf categories parameters are assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Child categories. Leaves have none and serialize without the field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Category>,
    /// Tree-view only: whether the node is shown expanded.
    #[serde(default)]
    pub expanded: bool,
}

impl Category {
    /// Create a leaf category.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            expanded: false,
        }
    }

    /// Create a group node with the given children.
    pub fn group(name: impl Into<String>, expanded: bool, children: Vec<Category>) -> Self {
        Self {
            name: name.into(),
            children,
            expanded,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Flip the `expanded` flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parameter
// ────────────────────────────────────────────────────────────────────────────

/// A single configurable item shown in the explorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Unique across the whole collection (e.g. `"PARAM_17"`).
    pub id: String,
    pub name: String,
    /// Name of the leaf category this parameter belongs to.
    pub category: String,
    pub editable: bool,
    /// Lower-case tags, used only for bucketing. Insertion order is kept so
    /// bucket output follows first occurrence.
    pub tags: IndexSet<String>,
    pub description: String,
    /// Opaque value; never interpreted by the filter engine.
    pub value: serde_json::Value,
}

impl Parameter {
    /// True if the parameter carries `tag` (tags are stored lower-case).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Buckets and view results
// ────────────────────────────────────────────────────────────────────────────

/// Tag-count summary shown instead of rows when too many parameters match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Upper-cased tag name, as displayed.
    pub name: String,
    pub count: usize,
}

/// Output of one filter pass: either the matching rows or, above the bucket
/// threshold, the tag buckets over those rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "items", rename_all = "snake_case")]
pub enum ViewResult {
    Rows(Vec<Parameter>),
    Buckets(Vec<Bucket>),
}

impl Default for ViewResult {
    fn default() -> Self {
        ViewResult::Rows(Vec::new())
    }
}

impl ViewResult {
    pub fn mode(&self) -> ViewMode {
        match self {
            ViewResult::Rows(_) => ViewMode::Rows,
            ViewResult::Buckets(_) => ViewMode::Buckets,
        }
    }

    pub fn is_buckets(&self) -> bool {
        matches!(self, ViewResult::Buckets(_))
    }

    /// Rows of the view; empty in bucket mode.
    pub fn rows(&self) -> &[Parameter] {
        match self {
            ViewResult::Rows(rows) => rows,
            ViewResult::Buckets(_) => &[],
        }
    }

    /// Buckets of the view; empty in row mode.
    pub fn buckets(&self) -> &[Bucket] {
        match self {
            ViewResult::Rows(_) => &[],
            ViewResult::Buckets(buckets) => buckets,
        }
    }
}

/// Which of the two views is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Rows,
    Buckets,
}

/// Serializable picture of everything the presentation layer displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub breadcrumb: Vec<String>,
    pub mode: ViewMode,
    /// Header count ("Parameters (N)"); zero in bucket mode.
    pub row_count: usize,
    pub rows: Vec<Parameter>,
    pub buckets: Vec<Bucket>,
    pub selected: Option<Parameter>,
}
