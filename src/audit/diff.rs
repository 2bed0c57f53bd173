//! Field-level change summaries for audit entries

use serde_json::Value;

const MAX_STRING_CHARS: usize = 40;

/// Summarize the top-level fields that differ between two JSON objects
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes: Vec<String> = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let changed_or_removed = before_obj.iter().filter_map(|(key, old)| {
                match after_obj.get(key) {
                    Some(new) if new == old => None,
                    Some(new) => Some(format!("{}: {} -> {}", key, format_value(old), format_value(new))),
                    None => Some(format!("{}: {} -> (removed)", key, format_value(old))),
                }
            });
            let added = after_obj
                .iter()
                .filter(|(key, _)| !before_obj.contains_key(*key))
                .map(|(key, new)| format!("{}: (added) -> {}", key, format_value(new)));

            changed_or_removed.chain(added).collect()
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_STRING_CHARS => {
            let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}
