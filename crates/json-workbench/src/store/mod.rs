//! Named snapshots of the editing buffer, capped and newest-first.

mod kv;

pub use kv::{FileStore, KeyValueStore, MemoryStore};

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::WorkbenchError;

/// Storage key holding the JSON-encoded saves list.
pub const SAVES_KEY: &str = "json_tool_saves";

/// Most snapshots retained at once; saving past the cap evicts the oldest.
pub const MAX_SAVES: usize = 10;

/// Name given to snapshots saved without one.
pub const DEFAULT_SAVE_NAME: &str = "Untitled";

/// One saved snapshot. `timestamp` is milliseconds since the Unix epoch;
/// `id` is derived from the save time and unique within the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDocument {
    pub id: String,
    pub name: String,
    pub content: String,
    pub timestamp: u64,
}

/// Snapshot operations over any [`KeyValueStore`].
///
/// The whole list lives under one key; every operation is a full
/// read-modify-write of that key.
pub struct DocumentStore<S> {
    kv: S,
}

impl<S: KeyValueStore> DocumentStore<S> {
    pub fn new(kv: S) -> Self {
        DocumentStore { kv }
    }

    /// All snapshots, newest first. A missing key is an empty list; a key
    /// that no longer decodes is an error, not a silent wipe.
    pub fn list(&self) -> Result<Vec<SavedDocument>, WorkbenchError> {
        match self.kv.get_item(SAVES_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(WorkbenchError::StoreDecode),
            None => Ok(Vec::new()),
        }
    }

    /// Prepend a snapshot of `content`, evicting past [`MAX_SAVES`].
    ///
    /// The name is trimmed; an empty name becomes [`DEFAULT_SAVE_NAME`].
    pub fn save(&mut self, name: &str, content: &str) -> Result<SavedDocument, WorkbenchError> {
        let mut list = self.list()?;
        let now = now_millis();
        let name = name.trim();
        let record = SavedDocument {
            id: unique_id(now, &list),
            name: if name.is_empty() {
                DEFAULT_SAVE_NAME.to_string()
            } else {
                name.to_string()
            },
            content: content.to_string(),
            timestamp: now,
        };
        list.insert(0, record.clone());
        list.truncate(MAX_SAVES);
        self.write(&list)?;
        Ok(record)
    }

    /// The content of the snapshot with `id`, if it exists.
    pub fn load_by_id(&self, id: &str) -> Result<Option<String>, WorkbenchError> {
        Ok(self.find_by_id(id)?.map(|doc| doc.content))
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<SavedDocument>, WorkbenchError> {
        Ok(self.list()?.into_iter().find(|doc| doc.id == id))
    }

    /// The id of the newest snapshot named `name`, if any.
    pub fn find_id_by_name(&self, name: &str) -> Result<Option<String>, WorkbenchError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|doc| doc.name == name)
            .map(|doc| doc.id))
    }

    /// Drop the snapshot with `id`. Unknown ids are a quiet no-op.
    pub fn delete_by_id(&mut self, id: &str) -> Result<(), WorkbenchError> {
        let mut list = self.list()?;
        list.retain(|doc| doc.id != id);
        self.write(&list)
    }

    /// Rename the snapshot with `id`, keeping its place, content and
    /// timestamp. Unknown ids are a quiet no-op.
    pub fn rename_by_id(&mut self, id: &str, new_name: &str) -> Result<(), WorkbenchError> {
        let mut list = self.list()?;
        for doc in &mut list {
            if doc.id == id {
                doc.name = new_name.to_string();
            }
        }
        self.write(&list)
    }

    /// Remove every snapshot by deleting the stored key.
    pub fn clear(&mut self) -> Result<(), WorkbenchError> {
        self.kv.remove_item(SAVES_KEY)
    }

    fn write(&mut self, list: &[SavedDocument]) -> Result<(), WorkbenchError> {
        let raw = serde_json::to_string(list).map_err(WorkbenchError::StoreEncode)?;
        self.kv.set_item(SAVES_KEY, &raw)
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

/// A time-based id, bumped past any id already taken in `list`. Two saves
/// in the same millisecond therefore still get distinct ids.
fn unique_id(now: u64, list: &[SavedDocument]) -> String {
    let mut candidate = now;
    loop {
        let id = candidate.to_string();
        if !list.iter().any(|doc| doc.id == id) {
            return id;
        }
        candidate += 1;
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DocumentStore<MemoryStore> {
        DocumentStore::new(MemoryStore::new())
    }

    #[test]
    fn saves_list_newest_first() {
        let mut store = store();
        store.save("first", "{\"n\":1}").unwrap();
        store.save("second", "{\"n\":2}").unwrap();
        let list = store.list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "second");
        assert_eq!(list[1].name, "first");
    }

    #[test]
    fn empty_name_becomes_untitled() {
        let mut store = store();
        let saved = store.save("   ", "{}").unwrap();
        assert_eq!(saved.name, "Untitled");
        let saved = store.save("  padded  ", "{}").unwrap();
        assert_eq!(saved.name, "padded");
    }

    #[test]
    fn cap_evicts_the_oldest() {
        let mut store = store();
        for n in 0..11 {
            store.save(&format!("save-{n}"), "{}").unwrap();
        }
        let list = store.list().unwrap();
        assert_eq!(list.len(), MAX_SAVES);
        assert_eq!(list[0].name, "save-10");
        assert_eq!(list[9].name, "save-1");
        assert!(store.find_id_by_name("save-0").unwrap().is_none());
    }

    #[test]
    fn ids_are_unique_even_within_one_millisecond() {
        let mut store = store();
        for n in 0..5 {
            store.save(&format!("s{n}"), "{}").unwrap();
        }
        let list = store.list().unwrap();
        let mut ids: Vec<&String> = list.iter().map(|doc| &doc.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn load_and_delete_by_id() {
        let mut store = store();
        let saved = store.save("doc", "{\"a\":1}").unwrap();
        assert_eq!(
            store.load_by_id(&saved.id).unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        store.delete_by_id(&saved.id).unwrap();
        assert_eq!(store.load_by_id(&saved.id).unwrap(), None);
    }

    #[test]
    fn unknown_ids_are_quiet() {
        let mut store = store();
        store.save("doc", "{}").unwrap();
        assert_eq!(store.load_by_id("no-such-id").unwrap(), None);
        store.delete_by_id("no-such-id").unwrap();
        store.rename_by_id("no-such-id", "x").unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn rename_keeps_everything_else() {
        let mut store = store();
        let saved = store.save("old", "{\"a\":1}").unwrap();
        store.rename_by_id(&saved.id, "new").unwrap();
        let doc = store.find_by_id(&saved.id).unwrap().unwrap();
        assert_eq!(doc.name, "new");
        assert_eq!(doc.content, "{\"a\":1}");
        assert_eq!(doc.timestamp, saved.timestamp);
    }

    #[test]
    fn clear_removes_the_stored_key() {
        let mut store = store();
        store.save("doc", "{}").unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn corrupted_list_is_an_error() {
        let mut kv = MemoryStore::new();
        kv.set_item(SAVES_KEY, "not json at all").unwrap();
        let store = DocumentStore::new(kv);
        assert!(matches!(
            store.list(),
            Err(WorkbenchError::StoreDecode(_))
        ));
    }

    #[test]
    fn wire_format_matches_the_stored_shape() {
        let raw = r#"[{"id":"1700000000000","name":"doc","content":"{}","timestamp":1700000000000}]"#;
        let mut kv = MemoryStore::new();
        kv.set_item(SAVES_KEY, raw).unwrap();
        let store = DocumentStore::new(kv);
        let list = store.list().unwrap();
        assert_eq!(list[0].id, "1700000000000");
        assert_eq!(list[0].timestamp, 1_700_000_000_000);
    }
}
