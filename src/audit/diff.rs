//! Diff generation for audit logging
//!
//! Turns two JSON snapshots into a `path: old -> new` summary. Nested objects
//! are walked so that a hardware edit reads `hardware.led_count: 10 -> 20`
//! instead of `hardware: {8 fields} -> {8 fields}`.

use serde_json::Value;

/// Summarize the changes between two JSON values, `None` if they are equal
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = collect_changes(before, after, "");
    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn collect_changes(before: &Value, after: &Value, prefix: &str) -> Vec<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        if before == after {
            return Vec::new();
        }
        let change = format!("{} -> {}", format_value(before), format_value(after));
        return vec![if prefix.is_empty() {
            change
        } else {
            format!("{}: {}", prefix, change)
        }];
    };

    let path = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    let mut changes = Vec::new();
    for (key, before_val) in before_obj {
        match after_obj.get(key) {
            Some(after_val) => changes.extend(collect_changes(before_val, after_val, &path(key))),
            None => changes.push(format!("{}: {} -> (removed)", path(key), format_value(before_val))),
        }
    }
    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) {
            changes.push(format!("{}: (added) -> {}", path(key), format_value(after_val)));
        }
    }
    changes
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
