use anyhow::{Context, Result};
use serde::Serialize;
use std::io;
use std::path::PathBuf;

use crate::models::Note;
use crate::notebook::Notebook;

/// One CSV row per note; timestamps use the persisted wire names
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    id: &'a str,
    title: &'a str,
    content: &'a str,
    completed: bool,
    time: String,
    #[serde(rename = "lastModified")]
    last_modified: String,
    color: &'a str,
}

impl<'a> ExportRow<'a> {
    fn from_note(note: &'a Note) -> Self {
        Self {
            id: &note.id,
            title: &note.title,
            content: &note.content,
            completed: note.completed,
            time: note.created_at.to_rfc3339(),
            last_modified: note.updated_at.to_rfc3339(),
            color: note.color.as_deref().unwrap_or(""),
        }
    }
}

/// Execute the export command. Writes CSV to `output`, or stdout when absent.
pub fn run_export(book: &Notebook, output: Option<PathBuf>) -> Result<()> {
    let to_file = output.is_some();

    let writer: Box<dyn io::Write> = match &output {
        Some(path) => Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    for note in book.notes() {
        csv_writer.serialize(ExportRow::from_note(note))?;
    }
    csv_writer.flush()?;

    if to_file {
        println!(
            "Exported {} note(s) to {}",
            book.len(),
            output.unwrap_or_default().display()
        );
    }

    Ok(())
}
