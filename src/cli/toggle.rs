use anyhow::{anyhow, Result};

use crate::cli::ui::find_note_by_identifier;
use crate::notebook::Notebook;

/// Execute the toggle command: flip a note between done and pending
pub fn run_toggle(book: &mut Notebook, identifier: &str) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    let Some(id) = find_note_by_identifier(book, identifier)? else {
        println!("No matches.");
        return Ok(());
    };

    book.toggle_complete(&id);

    match book.get(&id) {
        Some(note) if note.completed => println!("Done."),
        Some(_) => println!("Reopened."),
        None => {}
    }

    Ok(())
}
