//! Shallow merge of two JSON objects.

use serde_json::{Map, Value};

use crate::error::{MergeSide, WorkbenchError};

/// Merge two JSON object documents one level deep.
///
/// Keys unique to either side survive; on a key present in both, the
/// `overlay` value wins wholesale, nested objects included. The result keeps
/// the base document's key order, with overlay-only keys appended in their
/// own order, and is pretty-printed.
///
/// Both sides must parse to top-level objects; the error names the side
/// that did not.
pub fn shallow_merge(base: &str, overlay: &str) -> Result<String, WorkbenchError> {
    let base = parse_side(base, MergeSide::Base)?;
    let overlay = parse_side(overlay, MergeSide::Overlay)?;

    let mut merged = base;
    for (key, value) in overlay {
        merged.insert(key, value);
    }
    Ok(serde_json::to_string_pretty(&Value::Object(merged))?)
}

fn parse_side(text: &str, side: MergeSide) -> Result<Map<String, Value>, WorkbenchError> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| WorkbenchError::MergeParse { side, source })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(WorkbenchError::MergeNotObject(side)),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
