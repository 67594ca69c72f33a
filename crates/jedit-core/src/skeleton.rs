//! Skeleton construction: the minimal tree carrying one value at one path.

use crate::path::{PathExpr, Segment};
use crate::types::Value;

/// Build the minimal `Object`/`Array` nesting such that following `path`
/// from the result's root reaches `value`. Arrays created along the way
/// are padded with [`Value::Placeholder`] below the addressed index and
/// have length exactly `index + 1`. An empty path returns `value`
/// unchanged -- that is how "set the whole current node" is expressed.
///
/// Folds right to left: the innermost wrapper is built first.
pub fn build(path: &PathExpr, value: Value) -> Value {
    let mut acc = value;
    for segment in path.segments().iter().rev() {
        acc = match segment {
            Segment::Key(name) => Value::Object(vec![(name.clone(), acc)]),
            Segment::Index(index) => {
                let mut slots = vec![Value::Placeholder; *index];
                slots.push(acc);
                Value::Array(slots)
            }
        };
    }
    acc
}
