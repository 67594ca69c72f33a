//! The mutation engine: one call from (document, current path, relative
//! expression, raw JSON literal) to a new document.
//!
//! The pipeline is build → merge → erase. Failure is atomic: parsing
//! errors surface before any building happens, the base document is only
//! ever read, and the new document is the return value -- there is no
//! partial state to clean up.

use crate::error::Result;
use crate::merge::{erase, merge};
use crate::path::PathExpr;
use crate::skeleton;
use crate::types::Value;

/// Parse a raw value literal. Legal inputs are any syntactically valid
/// JSON: `true`, `42`, `"text"`, or full object/array literals. Anything
/// else is a [`crate::JeditError::ValueSyntax`].
pub fn parse_value(raw: &str) -> Result<Value> {
    raw.trim().parse()
}

/// Compute the write/read target: the literal `.` addresses `current`
/// itself; an expression with a leading `$` root marker is absolute;
/// anything else is parsed and appended to `current` segment-wise.
pub fn effective_path(current: &PathExpr, expr: &str) -> Result<PathExpr> {
    if expr == "." {
        return Ok(current.clone());
    }
    let parsed = PathExpr::parse(expr)?;
    if expr.starts_with('$') {
        Ok(parsed)
    } else {
        Ok(current.join(&parsed))
    }
}

/// Set the node addressed by `expr` (relative to `current`) to the JSON
/// value in `raw`, creating missing intermediate objects and arrays.
/// Array slots below a created index come back as `null`.
///
/// Returns the new document; `document` itself is never modified, and on
/// error the caller's state is exactly as it was.
pub fn mutate(document: &Value, current: &PathExpr, expr: &str, raw: &str) -> Result<Value> {
    let target = effective_path(current, expr)?;
    let value = parse_value(raw)?;
    let skeleton = skeleton::build(&target, value);
    let merged = merge(document, &skeleton);
    Ok(erase(&merged))
}
