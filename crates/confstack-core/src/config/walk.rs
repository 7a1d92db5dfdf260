//! Key walking over merged config objects

use confstack_fs::ConfigObject;
use serde_json::Value;

/// Walk `segments` down from `root`.
///
/// Every segment but the last must land on an object (or on an array,
/// indexed by a decimal segment) to continue. Returns `None` for an empty
/// path or when any segment is missing.
pub fn find_value<'a>(root: &'a ConfigObject, segments: &[String]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = root.get(first.as_str())?;
    for segment in rest {
        current = child(current, segment)?;
    }
    Some(current)
}

fn child<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Whether a value counts as present under the falsy-as-absent policy.
///
/// `null`, `false`, zero and the empty string are falsy; containers are
/// always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
