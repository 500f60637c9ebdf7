use anyhow::Result;

use crate::cli::display::print_note_row;
use crate::models::Filter;
use crate::notebook::Notebook;

/// Execute the search command
pub fn run_search(book: &Notebook, query: &str, filter: Option<String>) -> Result<()> {
    let filter = filter.map(|f| Filter::parse(&f)).unwrap_or_default();
    let query = query.trim();

    let matches = book.visible(query, filter);

    if matches.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    for note in &matches {
        print_note_row(note, 44);
    }
    println!("\n{} match(es)", matches.len());

    Ok(())
}
