//! Whole-buffer JSON transformations.
//!
//! Every operation here is text in, text out: parse the buffer, rework the
//! parsed value, serialize the result. The buffer owner only replaces its
//! text on `Ok`, so a failed transformation never destroys user input.

mod merge;
mod sort;

pub use merge::shallow_merge;
pub use sort::{sort, sort_by_key, sort_by_value, SortBy, SortOrder};

use serde_json::Value;

use crate::error::WorkbenchError;

// ── Formatting ───────────────────────────────────────────────────────────────

/// Re-serialize `text` with two-space indentation.
///
/// Object key order is preserved exactly as written.
pub fn pretty(text: &str) -> Result<String, WorkbenchError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Re-serialize `text` with all insignificant whitespace removed.
pub fn minify(text: &str) -> Result<String, WorkbenchError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&value)?)
}

// ── Tests ────────────────────────────────────────────────────────────────────
