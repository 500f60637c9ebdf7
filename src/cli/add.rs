use anyhow::Result;

use crate::cli::ui::{multiline_input, prompt_field_optional, FormResult};
use crate::notebook::Notebook;

/// Execute the add command
pub fn run_add(book: &mut Notebook, title: Option<String>, content: Option<String>) -> Result<()> {
    // If no options provided, run interactive mode
    if title.is_none() && content.is_none() {
        return note_add_prompt(book);
    }

    let title = title.unwrap_or_default();
    let content = content.unwrap_or_default();

    match book.add(&title, &content) {
        Some(note) => {
            let shown = if note.title.is_empty() {
                "(untitled)"
            } else {
                note.title.as_str()
            };
            println!("Created: {}", shown);
        }
        None => println!("Nothing to add."),
    }

    Ok(())
}

/// Interactive note form: single-line title, multiline content
pub fn note_add_prompt(book: &mut Notebook) -> Result<()> {
    let title = match prompt_field_optional("title")? {
        FormResult::Value(v) => v,
        FormResult::Cancelled => {
            println!("Cancelled.");
            return Ok(());
        }
    };

    let content = multiline_input("content: ([esc] for commands)", "save")?.unwrap_or_default();

    match book.add(&title, &content) {
        Some(_) => println!("Saved."),
        None => println!("Nothing to add."),
    }

    Ok(())
}
