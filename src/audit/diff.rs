//! Change summaries for audited updates

use serde_json::Value;

/// Fields that change on every write and carry no information for a reader
const IGNORED_FIELDS: &[&str] = &["updated_at"];

const MAX_STRING_CHARS: usize = 40;

/// Summarize top-level field changes between two entity snapshots
///
/// Returns `None` when nothing a reader cares about changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(old), Value::Object(new)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", render(before), render(after)));
    };

    let mut changes = Vec::new();
    for (key, old_value) in old {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match new.get(key) {
            Some(new_value) if new_value != old_value => {
                changes.push(format!("{}: {} -> {}", key, render(old_value), render(new_value)))
            }
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, render(old_value))),
        }
    }
    for (key, new_value) in new {
        if !old.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
            changes.push(format!("{}: (added) -> {}", key, render(new_value)));
        }
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_STRING_CHARS => {
            let head: String = s.chars().take(MAX_STRING_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields_only() {
        let before = json!({"name": "Comida", "monthly_target": 60000000});
        let after = json!({"name": "Mercado", "monthly_target": 60000000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "name: \"Comida\" -> \"Mercado\"");
    }

    #[test]
    fn test_updated_at_is_ignored() {
        let before = json!({"name": "A", "updated_at": "2025-01-01T00:00:00Z"});
        let after = json!({"name": "A", "updated_at": "2025-01-02T00:00:00Z"});
        assert!(generate_diff(&before, &after).is_none());
    }

    #[test]
    fn test_deadline_cleared_and_added() {
        let diff = generate_diff(
            &json!({"deadline": "2025-12-01"}),
            &json!({"deadline": null, "notes": "x"}),
        )
        .unwrap();
        assert!(diff.contains("deadline: \"2025-12-01\" -> null"));
        assert!(diff.contains("notes: (added) -> \"x\""));
    }

    #[test]
    fn test_removed_field() {
        let diff = generate_diff(&json!({"a": 1, "b": true}), &json!({"a": 1})).unwrap();
        assert_eq!(diff, "b: true -> (removed)");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).unwrap(), "1 -> 2");
        assert!(generate_diff(&json!("x"), &json!("x")).is_none());
    }

    #[test]
    fn test_long_strings_are_cut_on_char_boundaries() {
        let long = "ñ".repeat(100);
        let diff = generate_diff(&json!({"notes": long}), &json!({"notes": "corto"})).unwrap();
        assert!(diff.contains("...\""));
        assert!(diff.contains("\"corto\""));
    }

    #[test]
    fn test_nested_values_are_summarized() {
        assert_eq!(render(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(render(&json!({"a": 1})), "{1 fields}");
        assert_eq!(render(&json!(null)), "null");
    }
}
