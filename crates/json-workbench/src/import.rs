//! Importing documents into the buffer from a URL or a local file.

use std::path::Path;

use tracing::debug;

use crate::error::WorkbenchError;
use crate::transform;

/// Fetch `url` with a single GET and return the body pretty-printed.
///
/// No retries and no authentication; redirects follow the HTTP client's
/// defaults. A non-success status fails with that status; a body that is
/// not valid JSON fails with a parse error.
pub fn from_url(url: &str) -> Result<String, WorkbenchError> {
    debug!(url, "importing from URL");
    let response = ureq::get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => WorkbenchError::HttpStatus { status },
        ureq::Error::Transport(transport) => WorkbenchError::Network(transport.to_string()),
    })?;
    let body = response
        .into_string()
        .map_err(|err| WorkbenchError::Network(err.to_string()))?;
    transform::pretty(&body)
}

/// Read `path` as UTF-8 text and return it pretty-printed.
pub fn from_file(path: &Path) -> Result<String, WorkbenchError> {
    debug!(path = %path.display(), "importing from file");
    let text = std::fs::read_to_string(path).map_err(WorkbenchError::FileRead)?;
    transform::pretty(&text)
}

// ── Tests ────────────────────────────────────────────────────────────────────
