//! Load/save adapter between the in-memory note collection and the key-value
//! storage area.
//!
//! The whole collection lives under one fixed key as a JSON list. Loading is
//! defensive: unreadable state is discarded, malformed records are dropped,
//! and historical field spellings are normalized before a record enters the
//! typed domain. Saving degrades on quota exhaustion instead of failing.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::PathBuf;

use crate::models::Note;
use crate::storage::{Storage, StorageError};

/// Fixed key the note list is persisted under
const NOTES_KEY: &str = "notes";

/// How many records survive a quota-exceeded save
const QUOTA_RETRY_KEEP: usize = 10;

/// Persistence adapter for the note collection
pub struct NoteStore {
    storage: Storage,
}

/// A note as it may appear in previously persisted data. Every field is
/// optional here; `decode` decides what is required and what has a default.
/// `complated` is the historical spelling of the completion flag.
#[derive(Debug, Deserialize)]
struct RawNote {
    id: Option<String>,
    title: Option<String>,
    content: Option<String>,
    completed: Option<bool>,
    complated: Option<bool>,
    time: Option<String>,
    #[serde(rename = "lastModified")]
    last_modified: Option<String>,
    color: Option<String>,
}

impl NoteStore {
    pub fn open() -> Result<Self> {
        Ok(Self {
            storage: Storage::open()?,
        })
    }

    pub fn open_at(path: PathBuf) -> Result<Self> {
        Ok(Self {
            storage: Storage::open_at(path)?,
        })
    }

    /// In-memory store for testing
    pub fn open_memory() -> Result<Self> {
        Ok(Self {
            storage: Storage::open_memory()?,
        })
    }

    /// Wrap an already-opened storage area (tests inject quota-limited ones)
    pub fn with_storage(storage: Storage) -> Self {
        Self { storage }
    }

    /// Load the note collection.
    ///
    /// Absent key -> empty. A value that does not parse as a JSON list is
    /// removed and replaced by an empty collection; parse failures never reach
    /// the caller. Individual records that cannot be decoded are dropped with
    /// a warning. Only backend failures propagate.
    pub fn load(&self) -> Result<Vec<Note>> {
        let Some(raw) = self.storage.get(NOTES_KEY)? else {
            return Ok(Vec::new());
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(_) => {
                // Unreadable prior state: discard it and start empty
                eprintln!("Warning: stored notes were unreadable and have been discarded");
                self.storage.remove(NOTES_KEY)?;
                return Ok(Vec::new());
            }
        };

        let total = values.len();
        let notes: Vec<Note> = values.into_iter().filter_map(decode).collect();

        let dropped = total - notes.len();
        if dropped > 0 {
            eprintln!("Warning: dropped {} malformed note(s) on load", dropped);
        }

        Ok(notes)
    }

    /// Persist the full collection. Never fails at the call site: quota
    /// exhaustion clears the area and retries with the first
    /// `QUOTA_RETRY_KEEP` records; anything else is warned and swallowed,
    /// leaving the in-memory state authoritative for the session.
    pub fn save(&self, notes: &[Note]) {
        if let Err(err) = self.try_save(notes) {
            eprintln!("Warning: notes were not saved: {}", err);
        }
    }

    fn try_save(&self, notes: &[Note]) -> Result<()> {
        let json = serde_json::to_string(notes)?;

        match self.storage.set(NOTES_KEY, &json) {
            Ok(()) => Ok(()),
            Err(StorageError::QuotaExceeded { .. }) => {
                // Free the whole area, then keep a bounded prefix rather than
                // losing every pending write
                self.storage.clear()?;
                let keep = &notes[..notes.len().min(QUOTA_RETRY_KEEP)];
                let json = serde_json::to_string(keep)?;
                self.storage.set(NOTES_KEY, &json)?;
                eprintln!(
                    "Warning: storage quota exceeded; kept only the first {} of {} notes",
                    keep.len(),
                    notes.len()
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Decode one persisted record into the canonical shape.
///
/// Required: `id`, `title`, and a boolean completion flag under either of its
/// recognized names. Timestamps that are missing or unparseable fall back
/// (creation -> now, modification -> creation) instead of dropping the record.
fn decode(value: serde_json::Value) -> Option<Note> {
    let raw: RawNote = serde_json::from_value(value).ok()?;

    let id = raw.id.filter(|id| !id.is_empty())?;
    let title = raw.title?;
    let completed = raw.completed.or(raw.complated)?;

    let created_at = raw
        .time
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or_else(Utc::now);
    let updated_at = raw
        .last_modified
        .as_deref()
        .and_then(parse_timestamp)
        .unwrap_or(created_at);

    Some(Note {
        id,
        title,
        content: raw.content.unwrap_or_default(),
        completed,
        created_at,
        updated_at,
        color: raw.color,
    })
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn memory_store() -> NoteStore {
        NoteStore::open_memory().unwrap()
    }

    fn sample(title: &str) -> Note {
        Note::new(title.to_string(), format!("content of {}", title))
    }

    #[test]
    fn test_load_empty_store() {
        let store = memory_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_roundtrip_preserves_collection() {
        let store = memory_store();
        let mut notes = vec![sample("one"), sample("two"), sample("three")];
        notes[1].completed = true;
        notes[2].color = Some("#ffcdd2".to_string());

        store.save(&notes);
        let loaded = store.load().unwrap();

        assert_eq!(loaded, notes);
    }

    #[test]
    fn test_unparseable_value_is_discarded() {
        let store = memory_store();
        store.storage.set(NOTES_KEY, "{not json[").unwrap();

        assert!(store.load().unwrap().is_empty());
        // The bad value was removed, not left to fail every load
        assert_eq!(store.storage.get(NOTES_KEY).unwrap(), None);
    }

    #[test]
    fn test_non_list_value_is_discarded() {
        let store = memory_store();
        store
            .storage
            .set(NOTES_KEY, r#"{"id":"x","title":"not a list"}"#)
            .unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.storage.get(NOTES_KEY).unwrap(), None);
    }

    #[test]
    fn test_record_missing_id_is_dropped() {
        let store = memory_store();
        let value = json!([
            {"id": "a1", "title": "good", "content": "ok", "completed": false},
            {"title": "no id", "content": "bad", "completed": false},
        ]);
        store.storage.set(NOTES_KEY, &value.to_string()).unwrap();

        let notes = store.load().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, "a1");
        assert_eq!(notes[0].title, "good");
    }

    #[test]
    fn test_record_missing_completion_flag_is_dropped() {
        let store = memory_store();
        let value = json!([
            {"id": "a1", "title": "no flag", "content": ""},
        ]);
        store.storage.set(NOTES_KEY, &value.to_string()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_legacy_complated_alias_is_normalized() {
        let store = memory_store();
        let value = json!([
            {"id": "a1", "title": "legacy", "content": "", "complated": true},
        ]);
        store.storage.set(NOTES_KEY, &value.to_string()).unwrap();

        let notes = store.load().unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].completed);

        // After a save the alias never reappears
        store.save(&notes);
        let raw = store.storage.get(NOTES_KEY).unwrap().unwrap();
        assert!(raw.contains("\"completed\""));
        assert!(!raw.contains("complated"));
    }

    #[test]
    fn test_canonical_flag_wins_over_alias() {
        let store = memory_store();
        let value = json!([
            {"id": "a1", "title": "both", "completed": false, "complated": true},
        ]);
        store.storage.set(NOTES_KEY, &value.to_string()).unwrap();

        let notes = store.load().unwrap();
        assert!(!notes[0].completed);
    }

    #[test]
    fn test_missing_content_defaults_empty() {
        let store = memory_store();
        let value = json!([
            {"id": "a1", "title": "bare", "completed": false},
        ]);
        store.storage.set(NOTES_KEY, &value.to_string()).unwrap();

        let notes = store.load().unwrap();
        assert_eq!(notes[0].content, "");
    }

    #[test]
    fn test_unparseable_timestamp_keeps_record() {
        let store = memory_store();
        let value = json!([
            {"id": "a1", "title": "old", "completed": false, "time": "1/1/2023, 10:15:00 AM"},
        ]);
        store.storage.set(NOTES_KEY, &value.to_string()).unwrap();

        let notes = store.load().unwrap();
        assert_eq!(notes.len(), 1);
        // Modification time falls back to creation time
        assert_eq!(notes[0].created_at, notes[0].updated_at);
    }

    #[test]
    fn test_quota_exceeded_keeps_first_ten() {
        let storage = Storage::open_memory().unwrap().with_quota(4 * 1024);
        let store = NoteStore::with_storage(storage);

        // Enough notes that the full list overflows a 4 KiB budget but a
        // ten-note prefix does not
        let notes: Vec<Note> = (0..50).map(|i| sample(&format!("note {:02}", i))).collect();
        store.save(&notes);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), QUOTA_RETRY_KEEP);
        assert_eq!(loaded, notes[..QUOTA_RETRY_KEEP].to_vec());
    }

    #[test]
    fn test_reopen_sees_saved_notes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.db");

        let store = NoteStore::open_at(path.clone()).unwrap();
        let notes = vec![sample("persisted")];
        store.save(&notes);
        drop(store);

        let store = NoteStore::open_at(path).unwrap();
        assert_eq!(store.load().unwrap(), notes);
    }

    #[test]
    fn test_save_smaller_than_quota_is_untruncated() {
        let storage = Storage::open_memory().unwrap().with_quota(4 * 1024);
        let store = NoteStore::with_storage(storage);

        let notes: Vec<Note> = (0..3).map(|i| sample(&format!("note {}", i))).collect();
        store.save(&notes);

        assert_eq!(store.load().unwrap().len(), 3);
    }
}
