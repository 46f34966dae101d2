//! Order-sensitive document assertions.
//!
//! `serde_json::Value` equality ignores mapping key order, so these helpers
//! compare the serialised form instead.

use anyhow::{Result, ensure};
use serde_json::Value;

/// Ensures `actual` and `expected` are equal, including the order of keys in
/// every mapping.
///
/// # Errors
///
/// Returns an error showing both documents when they differ.
pub fn ensure_identical(actual: &Value, expected: &Value) -> Result<()> {
    let actual_text = serde_json::to_string_pretty(actual)?;
    let expected_text = serde_json::to_string_pretty(expected)?;
    ensure!(
        actual_text == expected_text,
        "documents differ\n--- actual ---\n{actual_text}\n--- expected ---\n{expected_text}"
    );
    Ok(())
}

/// Returns the keys of a mapping in iteration order, or nothing for other
/// shapes.
#[must_use]
pub fn keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default()
}

/// Returns the `name` of every record in a sequence, in order.
#[must_use]
pub fn record_names(value: &Value) -> Vec<Value> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("name").cloned())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{ensure_identical, keys, record_names};
    use serde_json::json;

    #[test]
    fn identical_documents_pass() {
        let doc = json!({"a": 1, "b": [true]});
        assert!(ensure_identical(&doc, &doc.clone()).is_ok());
    }

    #[test]
    fn reordered_keys_fail() {
        let left = json!({"a": 1, "b": 2});
        let right = json!({"b": 2, "a": 1});
        assert_eq!(left, right);
        assert!(ensure_identical(&left, &right).is_err());
    }

    #[test]
    fn keys_follow_insertion_order() {
        assert_eq!(keys(&json!({"z": 1, "a": 2})), ["z", "a"]);
        assert!(keys(&json!([1])).is_empty());
    }

    #[test]
    fn record_names_skip_plain_values() {
        let names = record_names(&json!([{"name": "A"}, "B", {"name": 3}]));
        assert_eq!(names, [json!("A"), json!(3)]);
    }
}
