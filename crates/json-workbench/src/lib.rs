//! JSON editing workbench.
//!
//! A library, plus thin command-line front-ends, for working over JSON
//! text buffers: pretty-printing, minifying, recursive key/value sorting,
//! shallow merging, JSON Schema validation, debounced undo/redo, named
//! snapshots in a key-value store, and URL/file import with file export.
//!
//! Object key insertion order is part of the observable contract
//! throughout; `serde_json` runs with `preserve_order`.
//!
//! The centrepiece is [`session::Session`], a reducer over
//! [`session::Action`] values. Each transformation is also callable on its
//! own as a plain string-in, string-out function in [`transform`].

pub mod error;
pub mod export;
pub mod history;
pub mod import;
pub mod render;
pub mod schema;
pub mod session;
pub mod store;
pub mod transform;

pub use error::{InputKind, MergeSide, WorkbenchError};
pub use history::{History, DEBOUNCE_WINDOW};
pub use render::{TextTree, TreeRender};
pub use schema::{validate, ValidationOutcome, Violation};
pub use session::{Action, Session, SessionState};
pub use store::{
    DocumentStore, FileStore, KeyValueStore, MemoryStore, SavedDocument, MAX_SAVES, SAVES_KEY,
};
pub use transform::{
    minify, pretty, shallow_merge, sort, sort_by_key, sort_by_value, SortBy, SortOrder,
};
