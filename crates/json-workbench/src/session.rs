//! The editing session: buffers, history and snapshots behind one reducer.

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::error::WorkbenchError;
use crate::export;
use crate::history::History;
use crate::import;
use crate::render::{TextTree, TreeRender};
use crate::schema;
use crate::store::{DocumentStore, KeyValueStore, MemoryStore, SavedDocument};
use crate::transform::{self, SortOrder};

/// Everything a front-end needs to paint the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// The main editing buffer. May hold invalid JSON between operations.
    pub buffer: String,
    /// The second document for shallow merges.
    pub overlay: String,
    /// The schema text used by validation.
    pub schema: String,
    /// The last rendered view, if any.
    pub output: Option<String>,
    /// The last validation message, if any. Validation problems land here
    /// too, not in `error`.
    pub validation: Option<String>,
    /// The last failed action's message. Cleared by the next action that
    /// succeeds.
    pub error: Option<String>,
}

/// One user action against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the editing buffer, as typing does.
    Edit(String),
    /// Replace the merge overlay buffer.
    EditOverlay(String),
    /// Replace the schema buffer.
    EditSchema(String),
    /// Pretty-print the buffer into the output slot, leaving the buffer
    /// alone.
    View,
    /// Pretty-print the buffer in place.
    Pretty,
    /// Minify the buffer in place.
    Minify,
    /// Sort object entries by key, recursively.
    SortKeys(SortOrder),
    /// Sort object entries by value text, recursively.
    SortValues(SortOrder),
    /// Step the buffer back through history.
    Undo,
    /// Step the buffer forward through history.
    Redo,
    /// Shallow-merge the overlay into the buffer.
    Merge,
    /// Validate the buffer against the schema buffer.
    Validate,
    /// Snapshot the buffer under a name.
    Save(String),
    /// Restore the snapshot with this id into the buffer.
    Load(String),
    /// Delete the snapshot with this id.
    Delete(String),
    /// Rename the snapshot with this id.
    Rename(String, String),
    /// Drop all snapshots.
    ClearSaves,
    /// Fetch a document over HTTP into the buffer.
    ImportUrl(String),
    /// Read a local file into the buffer.
    ImportFile(PathBuf),
    /// Write the buffer to `exported.json` under this directory.
    Export(PathBuf),
}

/// A live editing session over a snapshot store `S`.
///
/// Actions go through [`Session::dispatch`]; the session settles pending
/// history first, applies the action, then reports through
/// [`SessionState`]. A failed action never changes the buffers.
pub struct Session<S> {
    state: SessionState,
    history: History,
    store: DocumentStore<S>,
    renderer: Box<dyn TreeRender>,
}

impl Session<MemoryStore> {
    /// A session whose snapshots live only as long as the process.
    pub fn in_memory() -> Self {
        Session::new(MemoryStore::new())
    }
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(kv: S) -> Self {
        Session::with_renderer(kv, Box::new(TextTree))
    }

    /// A session with a custom tree renderer.
    pub fn with_renderer(kv: S, renderer: Box<dyn TreeRender>) -> Self {
        Session {
            state: SessionState::default(),
            history: History::new(),
            store: DocumentStore::new(kv),
            renderer,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// All snapshots, newest first.
    pub fn saves(&self) -> Result<Vec<SavedDocument>, WorkbenchError> {
        self.store.list()
    }

    /// Commit any pending edit to history without waiting out the debounce.
    pub fn flush_history(&mut self) {
        self.history.flush();
    }

    /// Render the parsed buffer through the session's tree renderer.
    pub fn render_tree(&self) -> Result<String, WorkbenchError> {
        let value: serde_json::Value = serde_json::from_str(&self.state.buffer)?;
        Ok(self.renderer.render(&value))
    }

    /// Dispatch with the current wall clock.
    pub fn dispatch(&mut self, action: Action) -> &SessionState {
        self.dispatch_at(action, Instant::now())
    }

    /// Dispatch at an explicit instant. Pending history settles against
    /// `now` before the action runs.
    pub fn dispatch_at(&mut self, action: Action, now: Instant) -> &SessionState {
        debug!(?action, "dispatch");
        self.history.settle(now);
        match self.apply(action, now) {
            Ok(()) => self.state.error = None,
            Err(err) => {
                debug!(error = %err, "action failed");
                self.state.error = Some(err.to_string());
            }
        }
        &self.state
    }

    fn apply(&mut self, action: Action, now: Instant) -> Result<(), WorkbenchError> {
        match action {
            Action::Edit(text) => {
                self.set_buffer(text, now);
                Ok(())
            }
            Action::EditOverlay(text) => {
                self.state.overlay = text;
                Ok(())
            }
            Action::EditSchema(text) => {
                self.state.schema = text;
                Ok(())
            }
            Action::View => match transform::pretty(&self.state.buffer) {
                Ok(text) => {
                    self.state.output = Some(text);
                    Ok(())
                }
                Err(err) => {
                    self.state.output = None;
                    Err(err)
                }
            },
            Action::Pretty => {
                let next = transform::pretty(&self.state.buffer)?;
                self.set_buffer(next, now);
                Ok(())
            }
            Action::Minify => {
                let next = transform::minify(&self.state.buffer)?;
                self.set_buffer(next, now);
                Ok(())
            }
            Action::SortKeys(order) => {
                let next = transform::sort_by_key(&self.state.buffer, order)?;
                self.set_buffer(next, now);
                Ok(())
            }
            Action::SortValues(order) => {
                let next = transform::sort_by_value(&self.state.buffer, order)?;
                self.set_buffer(next, now);
                Ok(())
            }
            Action::Undo => {
                let restored = self.history.undo(&self.state.buffer);
                if let Some(text) = restored {
                    self.set_buffer(text, now);
                }
                Ok(())
            }
            Action::Redo => {
                let restored = self.history.redo(&self.state.buffer);
                if let Some(text) = restored {
                    self.set_buffer(text, now);
                }
                Ok(())
            }
            Action::Merge => {
                let merged = transform::shallow_merge(&self.state.buffer, &self.state.overlay)?;
                self.set_buffer(merged, now);
                self.state.overlay.clear();
                Ok(())
            }
            Action::Validate => {
                let message = match schema::validate(&self.state.schema, &self.state.buffer) {
                    Ok(outcome) => outcome.to_message(),
                    Err(err) => err.to_string(),
                };
                self.state.validation = Some(message);
                Ok(())
            }
            Action::Save(name) => {
                // Nothing to snapshot from an empty buffer.
                if self.state.buffer.is_empty() {
                    return Ok(());
                }
                self.store.save(&name, &self.state.buffer)?;
                Ok(())
            }
            Action::Load(id) => {
                let content = self.store.load_by_id(&id)?;
                if let Some(text) = content {
                    self.set_buffer(text, now);
                }
                Ok(())
            }
            Action::Delete(id) => self.store.delete_by_id(&id),
            Action::Rename(id, name) => self.store.rename_by_id(&id, &name),
            Action::ClearSaves => self.store.clear(),
            Action::ImportUrl(url) => {
                let text = import::from_url(&url)?;
                self.set_buffer(text, now);
                Ok(())
            }
            Action::ImportFile(path) => {
                let text = import::from_file(&path)?;
                self.set_buffer(text, now);
                Ok(())
            }
            Action::Export(dir) => {
                export::to_file(&self.state.buffer, &dir)?;
                Ok(())
            }
        }
    }

    /// Replace the buffer and restart the history debounce clock, the same
    /// way a keystroke does.
    fn set_buffer(&mut self, text: String, now: Instant) {
        self.state.buffer = text;
        self.history.note_edit(&self.state.buffer, now);
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
