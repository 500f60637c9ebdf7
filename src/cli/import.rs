use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

use crate::notebook::Notebook;

/// A row from an import CSV. Only title/content matter for creation; a
/// truthy completed column marks the imported note done.
#[derive(Debug, Deserialize)]
pub struct ImportRow {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl ImportRow {
    /// Validate that the row would not be rejected as a blank note.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() && self.content.trim().is_empty() {
            bail!("title and content are both empty");
        }
        Ok(())
    }
}

/// Import results summary.
#[derive(Debug, Default)]
pub struct ImportStats {
    pub imported: u32,
    pub errors: u32,
}

/// Execute the import command.
pub fn run_import(book: &mut Notebook, file: &str) -> Result<()> {
    let path = Path::new(file);
    if !path.exists() {
        bail!("File not found: {}", file);
    }

    let reader = File::open(path).context("Failed to open CSV file")?;
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut stats = ImportStats::default();

    let rows: Vec<_> = csv_reader.deserialize().collect();

    // Notes prepend on add, so walk the rows backwards to keep file order
    for (idx, result) in rows.into_iter().enumerate().rev() {
        let line = idx + 2; // CSV line number (1-indexed, skip header)

        let row: ImportRow = match result {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Line {}: parse error: {}", line, e);
                stats.errors += 1;
                continue;
            }
        };

        if let Err(e) = row.validate() {
            eprintln!("Line {}: validation error: {}", line, e);
            stats.errors += 1;
            continue;
        }

        let Some(id) = book.add(&row.title, &row.content).map(|n| n.id.clone()) else {
            stats.errors += 1;
            continue;
        };
        if row.completed == Some(true) {
            book.toggle_complete(&id);
        }
        stats.imported += 1;
    }

    println!("Imported {} note(s), {} error(s).", stats.imported, stats.errors);

    Ok(())
}
