//! Error types shared across the workbench.

use std::fmt;

use thiserror::Error;

/// Which side of a two-document operation a problem belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSide {
    /// The main editing buffer.
    Base,
    /// The second document merged on top.
    Overlay,
}

impl fmt::Display for MergeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeSide::Base => f.write_str("base"),
            MergeSide::Overlay => f.write_str("overlay"),
        }
    }
}

/// Which input buffer an operation was reading when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The main JSON document.
    Document,
    /// The JSON Schema text.
    Schema,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Document => f.write_str("JSON input"),
            InputKind::Schema => f.write_str("JSON schema"),
        }
    }
}

/// Everything that can go wrong inside the workbench.
#[derive(Debug, Error)]
pub enum WorkbenchError {
    /// The buffer under transformation is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// An operation needs a non-empty buffer and got an empty one.
    #[error("{0} is empty")]
    EmptyInput(InputKind),

    /// One side of a shallow merge failed to parse.
    #[error("cannot merge: the {side} document is not valid JSON: {source}")]
    MergeParse {
        side: MergeSide,
        #[source]
        source: serde_json::Error,
    },

    /// One side of a shallow merge parsed to something other than an object.
    #[error("cannot merge: the {0} document is not a JSON object")]
    MergeNotObject(MergeSide),

    /// The document under validation is not valid JSON.
    #[error("invalid JSON input: {0}")]
    DocumentParse(#[source] serde_json::Error),

    /// The schema text is not valid JSON.
    #[error("invalid JSON schema: {0}")]
    SchemaParse(#[source] serde_json::Error),

    /// The schema parsed as JSON but does not compile as a schema.
    #[error("schema does not compile: {0}")]
    SchemaCompile(String),

    /// A URL import answered with a non-success status.
    #[error("failed to fetch JSON from URL: HTTP {status}")]
    HttpStatus { status: u16 },

    /// A URL import failed below the HTTP layer.
    #[error("failed to fetch JSON from URL: {0}")]
    Network(String),

    /// A file import could not be read.
    #[error("failed to read file: {0}")]
    FileRead(#[source] std::io::Error),

    /// An export could not be written.
    #[error("failed to write export: {0}")]
    ExportWrite(#[source] std::io::Error),

    /// The key-value backend failed.
    #[error("storage failure: {0}")]
    Store(#[source] std::io::Error),

    /// The stored saves list is not decodable.
    #[error("saved-document list is corrupted: {0}")]
    StoreDecode(#[source] serde_json::Error),

    /// The saves list could not be encoded for storage.
    #[error("saved-document list could not be encoded: {0}")]
    StoreEncode(#[source] serde_json::Error),
}

// ── Tests ────────────────────────────────────────────────────────────────────
