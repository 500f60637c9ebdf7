use anyhow::{anyhow, Result};

use crate::cli::display::print_note;
use crate::cli::ui::find_note_by_identifier;
use crate::notebook::Notebook;

/// Execute the show command
pub fn run_show(book: &Notebook, identifier: &str) -> Result<()> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(anyhow!("Identifier cannot be empty."));
    }

    match find_note_by_identifier(book, identifier)? {
        Some(id) => {
            if let Some(note) = book.get(&id) {
                print_note(note);
            }
        }
        None => println!("No matches."),
    }

    Ok(())
}
