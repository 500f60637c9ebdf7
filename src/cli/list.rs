use anyhow::Result;

use crate::cli::display::format_short_date;
use crate::cli::ui::truncate;
use crate::models::Filter;
use crate::notebook::Notebook;

/// Execute the list command: non-interactive table, safe to pipe
pub fn run_list(book: &Notebook, filter: Option<String>, search: Option<String>) -> Result<()> {
    let filter = filter.map(|f| Filter::parse(&f)).unwrap_or_default();
    let query = search.unwrap_or_default();

    let visible = book.visible(&query, filter);

    if visible.is_empty() {
        println!("No notes.");
        return Ok(());
    }

    for note in &visible {
        let title = if note.title.is_empty() {
            truncate(note.preview(), 44)
        } else {
            truncate(&note.title, 44)
        };
        let checkbox = if note.completed { "[x]" } else { "[ ]" };
        println!(
            "{}  {}  {:<44}  {}",
            short_id(&note.id),
            checkbox,
            title,
            format_short_date(note.updated_at)
        );
    }

    let (pending, completed) = book.counts();
    println!(
        "\n{} shown, {} pending, {} done",
        visible.len(),
        pending,
        completed
    );

    Ok(())
}

/// First 8 characters of an id, enough to paste back as a prefix
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
