//! Placeholder-aware tree merging and the final placeholder erase.
//!
//! [`merge`] reconciles two values with overlay precedence: a
//! [`Value::Placeholder`] loses to anything, containers of the same kind
//! merge recursively, and every other combination is replaced by the
//! overlay wholesale. The merge is not commutative, but it is idempotent
//! (`merge(x, x) == x` for placeholder-free `x`) and `Placeholder` is its
//! identity on both sides.
//!
//! [`erase`] rewrites placeholders that survive a merge -- untouched array
//! slots -- to `Null`, producing a plain JSON tree.

use crate::types::Value;

/// Merge `overlay` into `base`, producing a new value. Neither input is
/// modified.
pub fn merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        // Placeholder never overrides a real value; two placeholders stay one.
        (Value::Placeholder, other) | (other, Value::Placeholder) => other.clone(),
        (Value::Object(a), Value::Object(b)) => merge_objects(a, b),
        (Value::Array(a), Value::Array(b)) => merge_arrays(a, b),
        // Kind mismatch or two scalars: the new write replaces the old
        // structure outright.
        (_, other) => other.clone(),
    }
}

/// Key union. Base keys keep their order; keys only in the overlay are
/// appended in overlay order; shared keys merge recursively.
fn merge_objects(a: &[(String, Value)], b: &[(String, Value)]) -> Value {
    let mut pairs: Vec<(String, Value)> = Vec::with_capacity(a.len() + b.len());
    for (key, base_value) in a {
        let merged = match b.iter().find(|(k, _)| k == key) {
            Some((_, overlay_value)) => merge(base_value, overlay_value),
            None => base_value.clone(),
        };
        pairs.push((key.clone(), merged));
    }
    for (key, overlay_value) in b {
        if !a.iter().any(|(k, _)| k == key) {
            pairs.push((key.clone(), overlay_value.clone()));
        }
    }
    Value::Object(pairs)
}

/// Result length is `max(len(a), len(b))`. Shared indices merge
/// recursively; indices past the shorter array are taken verbatim from the
/// longer one, as if the missing side were Placeholder.
fn merge_arrays(a: &[Value], b: &[Value]) -> Value {
    let len = a.len().max(b.len());
    let mut items = Vec::with_capacity(len);
    for i in 0..len {
        let item = match (a.get(i), b.get(i)) {
            (Some(x), Some(y)) => merge(x, y),
            (Some(x), None) => x.clone(),
            (None, Some(y)) => y.clone(),
            (None, None) => unreachable!(),
        };
        items.push(item);
    }
    Value::Array(items)
}

/// Replace every [`Value::Placeholder`] at any depth with `Null`,
/// reproducing everything else. Total: never fails.
pub fn erase(value: &Value) -> Value {
    match value {
        Value::Placeholder => Value::Null,
        Value::Array(items) => Value::Array(items.iter().map(erase).collect()),
        Value::Object(pairs) => Value::Object(
            pairs
                .iter()
                .map(|(key, value)| (key.clone(), erase(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}
