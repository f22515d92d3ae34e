//! Recursive HTML sanitization of JSON documents.

use serde_json::Value;

/// Strip dangerous markup from one string
///
/// Strings without `<` cannot carry markup and are returned unchanged.
pub fn sanitize_str(input: &str) -> String {
    if input.contains('<') {
        ammonia::clean(input)
    } else {
        input.to_string()
    }
}

/// Sanitize every string in `value`, leaving `password` fields alone
pub fn sanitize_value(value: &mut Value) {
    match value {
        Value::String(s) => {
            if s.contains('<') {
                *s = sanitize_str(s);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sanitize_value),
        Value::Object(map) => {
            for (key, item) in map.iter_mut() {
                if !key.to_ascii_lowercase().contains("password") {
                    sanitize_value(item);
                }
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}
