//! Read-side path resolution: lookups, match listing, and the completion
//! feed.
//!
//! The mutation engine never needs an existing match to create structure;
//! these functions serve the navigation commands (`show`, `summary`,
//! `edit`) and tab completion. The restricted syntax addresses at most one
//! node, so [`resolve`] returns zero or one matches; the sequence shape is
//! the contract.

use crate::engine::effective_path;
use crate::error::Result;
use crate::path::{PathExpr, Segment};
use crate::types::Value;

/// Follow `path` segment by segment. `None` on a missing key, an
/// out-of-range index, or a kind mismatch along the way.
pub fn lookup<'a>(document: &'a Value, path: &PathExpr) -> Option<&'a Value> {
    let mut node = document;
    for segment in path.segments() {
        node = match segment {
            Segment::Key(name) => node.get(name)?,
            Segment::Index(index) => node.get_index(*index)?,
        };
    }
    Some(node)
}

/// Resolve `expr` relative to `base` against `document`, returning the
/// matching (full path, value) pairs. An empty vector means no match; an
/// empty `expr` (or the literal `.`) addresses `base` itself. Only path
/// syntax can fail.
pub fn resolve<'a>(
    document: &'a Value,
    base: &PathExpr,
    expr: &str,
) -> Result<Vec<(PathExpr, &'a Value)>> {
    let target = if expr.is_empty() {
        base.clone()
    } else {
        effective_path(base, expr)?
    };
    let found = lookup(document, &target);
    Ok(found.map(|value| (target, value)).into_iter().collect())
}

/// Keys of the object at `path` that start with `prefix`, in insertion
/// order. Empty for missing paths and non-objects. This is the completion
/// feed for the interactive loop.
pub fn child_keys(document: &Value, path: &PathExpr, prefix: &str) -> Vec<String> {
    match lookup(document, path) {
        Some(Value::Object(pairs)) => pairs
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect(),
        _ => Vec::new(),
    }
}
