//! Exporting the buffer to a file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{InputKind, WorkbenchError};
use crate::transform;

/// File name written by [`to_file`].
pub const EXPORT_FILE_NAME: &str = "exported.json";

/// Pretty-print `text` and write it to `exported.json` under `dir`,
/// returning the written path.
///
/// An empty or unparsable buffer fails before anything touches the file
/// system.
pub fn to_file(text: &str, dir: &Path) -> Result<PathBuf, WorkbenchError> {
    if text.is_empty() {
        return Err(WorkbenchError::EmptyInput(InputKind::Document));
    }
    let pretty = transform::pretty(text)?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, &pretty).map_err(WorkbenchError::ExportWrite)?;
    debug!(path = %path.display(), "exported buffer");
    Ok(path)
}

// ── Tests ────────────────────────────────────────────────────────────────────
