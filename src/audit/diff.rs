//! Field-level diffs for audit entries

use serde_json::Value;

/// Fields that change on every write and carry no information for a reader
const IGNORED_FIELDS: &[&str] = &["updated_at"];

/// Describe which top-level fields changed between two snapshots
///
/// Returns `None` when nothing a reader would care about changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();

    for (key, before_val) in before_obj {
        if IGNORED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match after_obj.get(key) {
            Some(after_val) if after_val != before_val => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(before_val),
                format_value(after_val)
            )),
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
        }
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) && !IGNORED_FIELDS.contains(&key.as_str()) {
            changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
        }
    }

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_field() {
        let before = json!({"name": "January", "fixed_expenses": 1285000});
        let after = json!({"name": "January", "fixed_expenses": 1300000});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "fixed_expenses: 1285000 -> 1300000");
    }

    #[test]
    fn test_updated_at_is_ignored() {
        let before = json!({"name": "January", "updated_at": "2025-01-01T00:00:00Z"});
        let after = json!({"name": "January", "updated_at": "2025-01-02T00:00:00Z"});

        assert!(generate_diff(&before, &after).is_none());
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"active_period_id": "abc"});
        let after = json!({"currency_symbol": "$"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("active_period_id: \"abc\" -> (removed)"));
        assert!(diff.contains("currency_symbol: (added) -> \"$\""));
    }

    #[test]
    fn test_long_strings_are_truncated() {
        let before = json!({"description": "a".repeat(80)});
        let after = json!({"description": "b"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains(&format!("\"{}...\"", "a".repeat(47))));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
        assert!(generate_diff(&json!(true), &json!(true)).is_none());
    }
}
