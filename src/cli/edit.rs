use anyhow::{anyhow, Result};

use crate::cli::ui::{find_note_by_identifier, prompt_field, FormResult};
use crate::notebook::Notebook;

/// Execute the edit command
pub fn run_edit(
    book: &mut Notebook,
    identifier: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    let Some(id) = find_note_by_identifier(book, identifier)? else {
        println!("No matches.");
        return Ok(());
    };

    // No flags: interactive field prompts pre-filled with current values
    if title.is_none() && content.is_none() {
        return note_edit_prompt(book, &id);
    }

    let current = book.get(&id).cloned().ok_or_else(|| anyhow!("note vanished"))?;
    let mut changes = Vec::new();
    if let Some(ref t) = title {
        changes.push(format!("title -> {}", t));
    }
    if content.is_some() {
        changes.push("content updated".to_string());
    }

    let new_title = title.unwrap_or(current.title);
    let new_content = content.unwrap_or(current.content);
    book.edit(&id, &new_title, &new_content);

    let shown = if new_title.is_empty() { "(untitled)" } else { new_title.as_str() };
    println!("Updated: {}", shown);
    for change in changes {
        println!("  - {}", change);
    }

    Ok(())
}

/// Interactive edit form for a known note id
pub fn note_edit_prompt(book: &mut Notebook, id: &str) -> Result<()> {
    let Some(current) = book.get(id).cloned() else {
        println!("No matches.");
        return Ok(());
    };

    let title = match prompt_field("title", Some(&current.title))? {
        FormResult::Value(v) => v,
        FormResult::Cancelled => {
            println!("Cancelled.");
            return Ok(());
        }
    };

    let content = match prompt_field("content", Some(&current.content))? {
        FormResult::Value(v) => v,
        FormResult::Cancelled => {
            println!("Cancelled.");
            return Ok(());
        }
    };

    if title == current.title && content == current.content {
        println!("No changes.");
        return Ok(());
    }

    book.edit(id, &title, &content);
    println!("Saved.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NoteStore;

    fn book_with_note() -> (Notebook, String) {
        let mut book = Notebook::load(NoteStore::open_memory().unwrap()).unwrap();
        book.add("Original", "body");
        let id = book.notes()[0].id.clone();
        (book, id)
    }

    #[test]
    fn test_edit_title_by_id() {
        let (mut book, id) = book_with_note();
        run_edit(&mut book, &id, Some("Renamed".to_string()), None).unwrap();

        let note = book.get(&id).unwrap();
        assert_eq!(note.title, "Renamed");
        assert_eq!(note.content, "body");
    }

    #[test]
    fn test_edit_content_keeps_title() {
        let (mut book, id) = book_with_note();
        run_edit(&mut book, &id, None, Some("new body".to_string())).unwrap();

        let note = book.get(&id).unwrap();
        assert_eq!(note.title, "Original");
        assert_eq!(note.content, "new body");
    }

    #[test]
    fn test_edit_empty_identifier_error() {
        let (mut book, _) = book_with_note();
        assert!(run_edit(&mut book, "  ", Some("x".to_string()), None).is_err());
    }

    #[test]
    fn test_edit_no_match() {
        let (mut book, id) = book_with_note();
        run_edit(&mut book, "zzz-no-such-note", Some("x".to_string()), None).unwrap();
        assert_eq!(book.get(&id).unwrap().title, "Original");
    }
}
