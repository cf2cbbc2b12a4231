//! Recursive ordering of object entries by key or by value.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::error::WorkbenchError;

/// What object entries are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Order entries by their key.
    Key,
    /// Order entries by their value's comparison text.
    Value,
}

/// Direction of the ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Sort every object in `text` and pretty-print the result.
///
/// Arrays keep their element order at every depth; sorting only reorders
/// the entries of objects, including objects nested inside arrays.
pub fn sort(text: &str, by: SortBy, order: SortOrder) -> Result<String, WorkbenchError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&sort_value(value, by, order))?)
}

/// [`sort`] fixed to key ordering.
pub fn sort_by_key(text: &str, order: SortOrder) -> Result<String, WorkbenchError> {
    sort(text, SortBy::Key, order)
}

/// [`sort`] fixed to value ordering.
pub fn sort_by_value(text: &str, order: SortOrder) -> Result<String, WorkbenchError> {
    sort(text, SortBy::Value, order)
}

fn sort_value(value: Value, by: SortBy, order: SortOrder) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| sort_value(item, by, order))
                .collect(),
        ),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(key_a, value_a), (key_b, value_b)| {
                let ordering = match by {
                    SortBy::Key => collate(key_a, key_b),
                    SortBy::Value => {
                        collate(&value_sort_key(value_a), &value_sort_key(value_b))
                    }
                };
                order.apply(ordering)
            });
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key, sort_value(value, by, order));
            }
            Value::Object(sorted)
        }
        other => other,
    }
}

/// Case-insensitive comparison, code points breaking ties.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The text a value contributes to value ordering: strings compare by
/// their content, numbers by their shortest decimal text, everything
/// else by its serialized JSON text.
fn value_sort_key(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        // serde_json writes float-stored whole numbers as "1.0"; the
        // f64 display form is the plain shortest decimal ("1").
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() => float.to_string(),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
