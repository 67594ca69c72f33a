//! The JSON value model jedit edits.
//!
//! [`Value`] mirrors the JSON data model with two departures. Objects are
//! key-value pair vectors in insertion order (keys unique within an object),
//! so a loaded document keeps its shape in memory without an extra map
//! dependency. And a [`Value::Placeholder`] variant marks array slots that
//! no operation has touched: placeholders exist only between a skeleton
//! build and the final erase, and are never serialized.
//!
//! Every mutation in this crate produces a new `Value` rather than editing
//! in place, so callers can always compare old against new.

use serde::Serialize;
use serde_json::Number;
use std::str::FromStr;

use crate::error::{JeditError, Result};

/// A JSON document value, plus the internal placeholder marker.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Integers and floats keep their `serde_json` representation so a
    /// document value of `5` never reserializes as `5.0`.
    Number(Number),
    String(String),
    Array(Vec<Value>),
    /// Key-value pairs in insertion order. Keys are unique.
    Object(Vec<(String, Value)>),
    /// Array slot not supplied by either side of a merge. Erased to `Null`
    /// before a document is handed back.
    Placeholder,
}

impl Value {
    /// The empty object, the starting document when no file exists yet.
    pub fn object() -> Value {
        Value::Object(Vec::new())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Value::Placeholder)
    }

    /// Look up an object member by key. `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Look up an array element by index. `None` for non-arrays.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Build from a parsed `serde_json` tree, preserving object key order
    /// (requires serde_json's `preserve_order` feature).
    pub fn from_json(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from_json(value)))
                    .collect(),
            ),
        }
    }

    /// Convert to a `serde_json` tree. Merge results are erased before
    /// serialization; a placeholder that somehow survives degrades to null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Placeholder => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(pairs) => {
                let mut map = serde_json::Map::with_capacity(pairs.len());
                for (key, value) in pairs {
                    map.insert(key.clone(), value.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }

    /// Canonical serialization: object keys sorted lexicographically at
    /// every level, 4-space indentation. This is the one wire-format
    /// guarantee jedit makes -- re-saving an untouched document reproduces
    /// it byte for byte.
    pub fn to_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        sort_keys(self.to_json()).serialize(&mut ser)?;
        Ok(String::from_utf8(buf).expect("serde_json output is valid UTF-8"))
    }
}

impl FromStr for Value {
    type Err = JeditError;

    /// Parse JSON text into a [`Value`]. Used both for loading documents
    /// and for the `set` command's value literals.
    fn from_str(s: &str) -> Result<Value> {
        let json: serde_json::Value = serde_json::from_str(s)?;
        Ok(Value::from_json(json))
    }
}

/// Recursively sort object keys so serialization is deterministic.
fn sort_keys(json: serde_json::Value) -> serde_json::Value {
    match json {
        serde_json::Value::Object(map) => {
            let mut pairs: Vec<(String, serde_json::Value)> = map.into_iter().collect();
            pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut sorted = serde_json::Map::with_capacity(pairs.len());
            for (key, value) in pairs {
                sorted.insert(key, sort_keys(value));
            }
            serde_json::Value::Object(sorted)
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(sort_keys).collect())
        }
        other => other,
    }
}
