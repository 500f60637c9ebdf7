use anyhow::{anyhow, Result};

use crate::cli::display::print_note;
use crate::cli::ui::{confirm, find_note_by_identifier};
use crate::notebook::Notebook;

/// Execute the delete command
pub fn run_delete(book: &mut Notebook, identifier: &str, force: bool) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    let Some(id) = find_note_by_identifier(book, identifier)? else {
        println!("No matches.");
        return Ok(());
    };

    if !force {
        if let Some(note) = book.get(&id) {
            print_note(note);
            println!();
        }

        let confirmed = confirm("Delete this note?").unwrap_or(false);
        if !confirmed {
            return Ok(());
        }
    }

    if book.delete(&id) {
        println!("Deleted.");
    } else {
        eprintln!("Error: failed to delete note {}", id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NoteStore;

    fn book_with_notes() -> Notebook {
        let mut book = Notebook::load(NoteStore::open_memory().unwrap()).unwrap();
        book.add("first", "a");
        book.add("second", "b");
        book
    }

    #[test]
    fn test_delete_by_id_force() {
        let mut book = book_with_notes();
        let id = book.notes()[0].id.clone();

        run_delete(&mut book, &id, true).unwrap();

        assert_eq!(book.len(), 1);
        assert!(book.get(&id).is_none());
    }

    #[test]
    fn test_delete_by_title_force() {
        let mut book = book_with_notes();
        run_delete(&mut book, "first", true).unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.notes()[0].title, "second");
    }

    #[test]
    fn test_delete_no_match() {
        let mut book = book_with_notes();
        run_delete(&mut book, "zzz-nothing", true).unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_delete_empty_identifier_error() {
        let mut book = book_with_notes();
        assert!(run_delete(&mut book, "   ", true).is_err());
    }
}
