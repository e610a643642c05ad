//! JSON file helpers and `Value` convenience accessors.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::fs::{read_text_file, write_text_file};

/// Reads and parses a JSON file.
///
/// Returns [`Value::Null`] when the file is absent, unreadable, or not
/// valid JSON.
///
/// # Examples
///
/// ```
/// use serde_json::Value;
///
/// assert_eq!(ioutil::read_json_file("/nonexistent.json"), Value::Null);
/// ```
#[must_use]
pub fn read_json_file(path: impl AsRef<Path>) -> Value {
    serde_json::from_str(&read_text_file(path)).unwrap_or(Value::Null)
}

/// Writes a JSON value with the given indent width.
///
/// An indent of `0` produces compact output. Returns `false` when
/// rendering or writing fails.
pub fn write_json_file(path: impl AsRef<Path>, value: &Value, indent: usize) -> bool {
    let rendered = if indent == 0 {
        serde_json::to_string(value).ok()
    } else {
        let indent_bytes = vec![b' '; indent];
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(&indent_bytes);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        value
            .serialize(&mut serializer)
            .ok()
            .and_then(|()| String::from_utf8(buffer).ok())
    };

    rendered.is_some_and(|text| write_text_file(path, &text))
}

/// Writes a JSON value with the conventional two-space indent.
pub fn write_pretty_json_file(path: impl AsRef<Path>, value: &Value) -> bool {
    write_json_file(path, value, 2)
}

/// Returns the strings under `key`, or an empty list.
///
/// Missing keys, non-array values, and non-string entries are all
/// silently skipped.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let value = json!({"names": ["a", "b", 3]});
/// assert_eq!(ioutil::string_list(&value, "names"), ["a", "b"]);
/// assert!(ioutil::string_list(&value, "absent").is_empty());
/// ```
#[must_use]
pub fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Returns the array under `key`, or an empty list.
#[must_use]
pub fn array(value: &Value, key: &str) -> Vec<Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
