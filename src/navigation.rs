use crate::model::Category;

/// Resolve a category node by a `/`-separated path, e.g. "Performance/CPU".
/// Returns `Some(&Category)` when every segment resolves, otherwise `None`.
pub fn resolve_category_by_path<'a>(roots: &'a [Category], path: &str) -> Option<&'a Category> {
    let parts = split_path(path);
    resolve_category_by_vec(roots, &parts)
}

/// Resolve a category node by a vector of names starting at the top level.
pub fn resolve_category_by_vec<'a, S: AsRef<str>>(
    roots: &'a [Category],
    path: &[S],
) -> Option<&'a Category> {
    let (first, rest) = path.split_first()?;
    let mut cur = roots.iter().find(|c| c.name == first.as_ref())?;
    for name in rest {
        cur = cur.children.iter().find(|c| c.name == name.as_ref())?;
    }
    Some(cur)
}

/// Split a category path into its non-empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.trim()
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Collect every root-to-leaf path, in tree order.
pub fn collect_leaf_paths(roots: &[Category]) -> Vec<Vec<String>> {
    fn rec(cur: &Category, path: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        path.push(cur.name.clone());
        if cur.is_leaf() {
            out.push(path.clone());
        } else {
            for child in &cur.children {
                rec(child, path, out);
            }
        }
        path.pop();
    }
    let mut out = Vec::new();
    let mut p = Vec::new();
    for root in roots {
        rec(root, &mut p, &mut out);
    }
    out
}

/// Names of all leaf categories, in tree order.
pub fn leaf_names(roots: &[Category]) -> Vec<String> {
    collect_leaf_paths(roots)
        .into_iter()
        .filter_map(|mut p| p.pop())
        .collect()
}

pub fn is_known_leaf(roots: &[Category], name: &str) -> bool {
    collect_leaf_paths(roots)
        .iter()
        .any(|p| p.last().is_some_and(|n| n == name))
}

/// Find a top-level node by name for in-place mutation.
pub fn find_top_level_mut<'a>(roots: &'a mut [Category], name: &str) -> Option<&'a mut Category> {
    roots.iter_mut().find(|c| c.name == name)
}
