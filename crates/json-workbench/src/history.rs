//! Debounced undo/redo over the editing buffer.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Quiet time an edit must survive before it becomes an undo step.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
struct Pending {
    text: String,
    armed_at: Instant,
}

/// Undo/redo stacks fed by a debounced edit stream.
///
/// Edits are noted, not recorded: a noted edit becomes an undo step only
/// once [`History::settle`] observes it unchanged for the full debounce
/// window. Keystroke bursts therefore collapse into a single step.
///
/// Redo steps survive new edits. Only stepping through the stacks moves
/// entries between them; nothing else clears the redo side.
#[derive(Debug, Clone)]
pub struct History {
    undo: Vec<String>,
    redo: VecDeque<String>,
    pending: Option<Pending>,
    window: Duration,
}

impl History {
    pub fn new() -> Self {
        History::with_window(DEBOUNCE_WINDOW)
    }

    /// A history with a custom debounce window.
    pub fn with_window(window: Duration) -> Self {
        History {
            undo: Vec::new(),
            redo: VecDeque::new(),
            pending: None,
            window,
        }
    }

    /// Note the buffer's new content at `at`, restarting the quiet-time
    /// clock. An empty buffer is never recorded and disarms any pending
    /// edit.
    pub fn note_edit(&mut self, text: &str, at: Instant) {
        if text.is_empty() {
            self.pending = None;
            return;
        }
        self.pending = Some(Pending {
            text: text.to_string(),
            armed_at: at,
        });
    }

    /// Commit the pending edit if it has been quiet for the full window.
    pub fn settle(&mut self, now: Instant) {
        let ripe = self
            .pending
            .as_ref()
            .is_some_and(|pending| now.duration_since(pending.armed_at) >= self.window);
        if ripe {
            self.flush();
        }
    }

    /// Commit the pending edit immediately, quiet or not.
    pub fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            if self.undo.last() != Some(&pending.text) {
                self.undo.push(pending.text);
            }
        }
    }

    /// Step back: returns the text to restore, recording `current` as the
    /// next redo step.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let restored = self.undo.pop()?;
        self.redo.push_front(current.to_string());
        Some(restored)
    }

    /// Step forward: returns the text to restore, recording `current` as
    /// the next undo step.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let restored = self.redo.pop_front()?;
        self.undo.push(current.to_string());
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of committed undo steps.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of committed redo steps.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}

impl Default for History {
    fn default() -> Self {
        History::new()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
