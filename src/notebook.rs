//! The note collection and its mutation operations.
//!
//! A `Notebook` is the only owner of the in-memory collection; every mutation
//! goes through one of the four operations here, and each operation persists
//! the full collection before returning.

use anyhow::Result;

use crate::models::note::{clamp_chars, random_color, MAX_CONTENT_CHARS, MAX_TITLE_CHARS};
use crate::models::{filter_notes, Filter, Note};
use crate::store::NoteStore;

pub struct Notebook {
    notes: Vec<Note>,
    store: NoteStore,
}

impl Notebook {
    /// Load the collection from the store
    pub fn load(store: NoteStore) -> Result<Self> {
        let notes = store.load()?;
        Ok(Self { notes, store })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// (pending, completed) counts
    pub fn counts(&self) -> (usize, usize) {
        let completed = self.notes.iter().filter(|n| n.completed).count();
        (self.notes.len() - completed, completed)
    }

    /// The visible subset for a query and filter, in collection order
    pub fn visible(&self, query: &str, filter: Filter) -> Vec<&Note> {
        filter_notes(&self.notes, query, filter)
    }

    /// Create a note and prepend it. Returns `None` without touching the
    /// collection when both title and content are blank after trimming.
    pub fn add(&mut self, title: &str, content: &str) -> Option<&Note> {
        if title.trim().is_empty() && content.trim().is_empty() {
            return None;
        }

        let mut note = Note::new(title.to_string(), content.to_string());
        note.color = Some(random_color().to_string());
        self.notes.insert(0, note);

        self.store.save(&self.notes);
        self.notes.first()
    }

    /// Flip a note between done and pending. Unknown id is a no-op.
    pub fn toggle_complete(&mut self, id: &str) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.completed = !note.completed;
        note.touch();

        self.store.save(&self.notes);
        true
    }

    /// Remove a note. Unknown id is a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return false;
        }

        self.store.save(&self.notes);
        true
    }

    /// Replace a note's title and content, keeping its id, completion flag,
    /// and creation time. Unknown id is a no-op.
    pub fn edit(&mut self, id: &str, title: &str, content: &str) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.title = clamp_chars(title, MAX_TITLE_CHARS);
        note.content = clamp_chars(content, MAX_CONTENT_CHARS);
        note.touch();

        self.store.save(&self.notes);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn empty_book() -> Notebook {
        Notebook::load(NoteStore::open_memory().unwrap()).unwrap()
    }

    #[test]
    fn test_add_prepends() {
        let mut book = empty_book();
        book.add("first", "");
        book.add("second", "");

        assert_eq!(book.notes()[0].title, "second");
        assert_eq!(book.notes()[1].title, "first");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut book = empty_book();
        assert!(book.add("", "").is_none());
        assert!(book.add("   ", "\t\n").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_title_only_or_content_only() {
        let mut book = empty_book();
        assert!(book.add("title only", "").is_some());
        assert!(book.add("", "content only").is_some());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_add_assigns_color_and_defaults() {
        let mut book = empty_book();
        let note = book.add("t", "c").unwrap();
        assert!(note.color.is_some());
        assert!(!note.completed);
    }

    #[test]
    fn test_ids_stay_unique_across_operations() {
        let mut book = empty_book();
        for i in 0..20 {
            book.add(&format!("note {}", i), "");
        }

        let victim = book.notes()[5].id.clone();
        book.delete(&victim);
        book.add("replacement", "");

        let toggled = book.notes()[3].id.clone();
        book.toggle_complete(&toggled);
        let edited = book.notes()[7].id.clone();
        book.edit(&edited, "edited", "body");

        let ids: HashSet<&str> = book.notes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), book.len());
        assert!(!ids.contains(victim.as_str()));
    }

    #[test]
    fn test_toggle_twice_restores_flag_and_touches() {
        let mut book = empty_book();
        book.add("t", "");
        let id = book.notes()[0].id.clone();
        let original_updated = book.notes()[0].updated_at;

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(book.toggle_complete(&id));
        assert!(book.notes()[0].completed);
        let after_first = book.notes()[0].updated_at;
        assert!(after_first > original_updated);

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(book.toggle_complete(&id));
        assert!(!book.notes()[0].completed);
        assert!(book.notes()[0].updated_at > after_first);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut book = empty_book();
        book.add("t", "");
        assert!(!book.toggle_complete("no-such-id"));
        assert!(!book.notes()[0].completed);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut book = empty_book();
        book.add("t", "");
        assert!(!book.delete("no-such-id"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_edit_preserves_identity_and_creation() {
        let mut book = empty_book();
        book.add("before", "old");
        let id = book.notes()[0].id.clone();
        let created = book.notes()[0].created_at;
        book.toggle_complete(&id);

        assert!(book.edit(&id, "after", "new"));
        let note = book.get(&id).unwrap();
        assert_eq!(note.title, "after");
        assert_eq!(note.content, "new");
        assert_eq!(note.created_at, created);
        assert!(note.completed);
        assert!(note.updated_at >= created);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut book = empty_book();
        assert!(!book.edit("ghost", "t", "c"));
    }

    #[test]
    fn test_counts() {
        let mut book = empty_book();
        book.add("a", "");
        book.add("b", "");
        book.add("c", "");
        let id = book.notes()[1].id.clone();
        book.toggle_complete(&id);

        assert_eq!(book.counts(), (2, 1));
    }

    #[test]
    fn test_mutations_persist() {
        let store = NoteStore::open_memory().unwrap();
        let mut book = Notebook::load(store).unwrap();
        book.add("kept", "body");
        let id = book.notes()[0].id.clone();
        book.toggle_complete(&id);

        // A fresh load from the same backing store sees the mutations...
        let reloaded = book.store.load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].title, "kept");
        assert!(reloaded[0].completed);
    }

    #[test]
    fn test_visible_delegates_to_filter() {
        let mut book = empty_book();
        book.add("Sample Note", "");
        book.add("Other", "");
        let id = book.notes()[1].id.clone();
        book.toggle_complete(&id);

        assert_eq!(book.visible("sample", Filter::All).len(), 1);
        assert_eq!(book.visible("", Filter::Completed).len(), 1);
        assert_eq!(book.visible("", Filter::Pending).len(), 1);
    }
}
