//! Interactive note browser
//!
//! Full-screen list with keyboard navigation, search, and a three-way
//! visibility filter. Entry point for `notecmd browse` and the menu.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    style::{Attribute, SetAttribute},
    ExecutableCommand,
};
use inquire::Text;
use std::io::{self, Write};

use crate::cli::add::note_add_prompt;
use crate::cli::display::{format_short_date, print_note};
use crate::cli::edit::note_edit_prompt;
use crate::cli::ui::{
    clear_screen, confirm, minimal_render_config, truncate, wait_for_key, RawModeGuard, StatusBar,
};
use crate::models::{Filter, Note};
use crate::notebook::Notebook;

/// Entry point from the menu - returns true if user wants to quit the app
pub fn run_browse(book: &mut Notebook, filter: Filter, query: String) -> Result<bool> {
    let mut filter = filter;
    let mut query = query;
    let mut selected_idx: usize = 0;

    loop {
        // Ids of the visible subset; rows borrow per render below
        let visible_ids: Vec<String> = book
            .visible(&query, filter)
            .iter()
            .map(|n| n.id.clone())
            .collect();
        let (pending, completed) = book.counts();

        // Clamp selection to valid range
        if visible_ids.is_empty() {
            selected_idx = 0;
        } else if selected_idx >= visible_ids.len() {
            selected_idx = visible_ids.len().saturating_sub(1);
        }

        clear_screen()?;
        let mut stdout = io::stdout();

        println!("NOTES ({} pending, {} done)", pending, completed);
        let search_hint = if query.is_empty() {
            String::new()
        } else {
            format!("  search:{}", query)
        };
        println!("filter:{}{}\n", filter.as_str(), search_hint);

        print_row_header();

        if visible_ids.is_empty() {
            if book.is_empty() {
                println!("  No notes. Press [n] to add one.\n");
            } else {
                println!("  No matches. Press [/] to change the search, [f] for filters.\n");
            }
        } else {
            for (idx, id) in visible_ids.iter().enumerate() {
                if let Some(note) = book.get(id) {
                    print_row(&mut stdout, note, idx == selected_idx)?;
                }
            }
        }

        println!();
        let status = StatusBar::new()
            .counter(
                if visible_ids.is_empty() { 0 } else { selected_idx + 1 },
                visible_ids.len(),
            )
            .action("n", "ew")
            .action("c", "heck")
            .action("e", "dit")
            .action("d", "el")
            .action("/", "search")
            .action("f", "ilter")
            .action("↑/↓", "")
            .action("q", "/esc")
            .action("Q", "uit")
            .render();
        println!("{}", status);
        stdout.flush()?;

        // Handle input
        let code = {
            let _guard = RawModeGuard::new()?;
            match event::read()? {
                Event::Key(KeyEvent { code, modifiers, .. }) => {
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        return Ok(false);
                    }
                    code
                }
                _ => continue,
            }
        };

        let selected_id = visible_ids.get(selected_idx).cloned();

        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                return Ok(false); // Return to menu
            }
            KeyCode::Char('Q') => {
                return Ok(true); // Quit app
            }
            KeyCode::Up | KeyCode::Char('k') => {
                selected_idx = selected_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !visible_ids.is_empty() && selected_idx < visible_ids.len() - 1 {
                    selected_idx += 1;
                }
            }
            KeyCode::Char('g') | KeyCode::Home => {
                selected_idx = 0;
            }
            KeyCode::Char('G') | KeyCode::End => {
                selected_idx = visible_ids.len().saturating_sub(1);
            }
            KeyCode::Char('n') => {
                let _ = clear_screen();
                note_add_prompt(book)?;
            }
            KeyCode::Char('c') => {
                if let Some(id) = selected_id {
                    book.toggle_complete(&id);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = selected_id {
                    let title = book.get(&id).map(|n| n.title.clone()).unwrap_or_default();
                    let _ = clear_screen();
                    if confirm(&format!("Delete \"{}\"?", truncate(&title, 40)))? {
                        book.delete(&id);
                    }
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = selected_id {
                    let _ = clear_screen();
                    note_edit_prompt(book, &id)?;
                }
            }
            KeyCode::Char('/') => {
                let _ = clear_screen();
                let input = Text::new("search: ")
                    .with_render_config(minimal_render_config())
                    .with_initial_value(&query)
                    .prompt_skippable()?;
                if let Some(input) = input {
                    query = input.trim().to_string();
                    selected_idx = 0;
                }
            }
            KeyCode::Char('f') => {
                filter = filter.cycle();
                selected_idx = 0;
            }
            KeyCode::Enter => {
                if let Some(id) = selected_id {
                    if let Some(note) = book.get(&id) {
                        clear_screen()?;
                        print_note(note);
                        println!();
                        wait_for_key()?;
                    }
                }
            }
            _ => {}
        }
    }
}

/// Column layout for note rows
struct RowLayout {
    title_width: usize,
    date_width: usize,
}

impl Default for RowLayout {
    fn default() -> Self {
        let (term_width, _) = crate::cli::ui::term_size();
        if term_width >= 80 {
            RowLayout {
                title_width: 44,
                date_width: 12,
            }
        } else {
            RowLayout {
                title_width: 28,
                date_width: 8,
            }
        }
    }
}

fn print_row_header() {
    let layout = RowLayout::default();
    println!(
        "{:<3}  {:<title$}  {:<date$}",
        "",
        "NOTE",
        "EDITED",
        title = layout.title_width,
        date = layout.date_width
    );
}

/// Print a single note row, with reverse video if selected
fn print_row(stdout: &mut io::Stdout, note: &Note, selected: bool) -> Result<()> {
    let layout = RowLayout::default();

    let checkbox = if note.completed { "[x]" } else { "[ ]" };
    let title = if note.title.is_empty() {
        truncate(note.preview(), layout.title_width)
    } else {
        truncate(&note.title, layout.title_width)
    };
    let date = truncate(&format_short_date(note.updated_at), layout.date_width);

    let line = format!(
        "{:<3}  {:<title$}  {:<date$}",
        checkbox,
        title,
        date,
        title = layout.title_width,
        date = layout.date_width
    );

    if selected {
        stdout.execute(SetAttribute(Attribute::Reverse))?;
        print!("{}", line);
        stdout.execute(SetAttribute(Attribute::Reset))?;
        println!();
    } else {
        println!("{}", line);
    }

    Ok(())
}
