//! Main menu for notecmd
//!
//! Uses inquire for clean, reliable terminal interaction.

use anyhow::{anyhow, Result};
use inquire::{Select, Text};
use std::io::{self, IsTerminal};

use crate::cli::ui::{clear_screen, minimal_render_config};
use crate::cli::{
    run_add, run_browse, run_delete, run_edit, run_export, run_import, run_list, run_search,
    run_show, run_toggle,
};
use crate::models::Filter;
use crate::notebook::Notebook;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    Browse,
    List,
    Search,
    Show,
    Add,
    Toggle,
    Edit,
    Delete,
    Export,
    Import,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::Browse,
        MenuOption::List,
        MenuOption::Search,
        MenuOption::Show,
        MenuOption::Add,
        MenuOption::Toggle,
        MenuOption::Edit,
        MenuOption::Delete,
        MenuOption::Export,
        MenuOption::Import,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::Browse => "Browse",
            MenuOption::List => "List",
            MenuOption::Search => "Search",
            MenuOption::Show => "Show",
            MenuOption::Add => "Add",
            MenuOption::Toggle => "Toggle",
            MenuOption::Edit => "Edit",
            MenuOption::Delete => "Delete",
            MenuOption::Export => "Export",
            MenuOption::Import => "Import",
            MenuOption::Quit => "Quit",
        }
    }

    fn from_label(s: &str) -> Option<MenuOption> {
        MenuOption::ALL.iter().find(|opt| opt.label() == s).copied()
    }
}

/// Run the interactive main menu
pub fn run_menu(book: &mut Notebook) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            notecmd list\n  \
            notecmd search <query>\n  \
            notecmd add -t <title>\n  \
            Run 'notecmd --help' for all options."
        ));
    }

    let menu_labels: Vec<&str> = MenuOption::ALL.iter().map(|opt| opt.label()).collect();

    loop {
        // Clear screen - if this fails, continue anyway (degraded but functional)
        let _ = clear_screen();

        let selection = Select::new("notecmd", menu_labels.clone())
            .with_render_config(minimal_render_config())
            .with_page_size(menu_labels.len())
            .with_vim_mode(true)
            .prompt_skippable();

        // Handle prompt errors (Ctrl+C, terminal issues) - exit gracefully
        let selection = match selection {
            Ok(sel) => sel,
            Err(_) => return Ok(()),
        };

        let Some(choice_label) = selection else {
            // User pressed Escape
            return Ok(());
        };

        let Some(choice) = MenuOption::from_label(choice_label) else {
            continue;
        };

        if choice == MenuOption::Quit {
            return Ok(());
        }

        let _ = clear_screen();

        // Execute command - all errors caught and displayed
        // Returns true if user wants to quit the app
        match execute_command(book, choice) {
            Ok(true) => return Ok(()),
            Err(e) => {
                eprintln!("\nError: {}", e);
                wait_for_continue();
            }
            Ok(false) => {
                if needs_pause(choice) {
                    wait_for_continue();
                }
            }
        }
    }
}

/// Commands whose output would be wiped by the next menu redraw
fn needs_pause(choice: MenuOption) -> bool {
    !matches!(choice, MenuOption::Browse)
}

/// Execute a menu command, catching all errors
/// Returns Ok(true) if the user wants to quit the app
fn execute_command(book: &mut Notebook, choice: MenuOption) -> Result<bool> {
    match choice {
        MenuOption::Browse => run_browse(book, Filter::All, String::new()),
        MenuOption::List => run_list(book, None, None).map(|_| false),
        MenuOption::Search => {
            let query = prompt_for_input("search: ")?;
            if query.is_empty() {
                run_list(book, None, None).map(|_| false)
            } else {
                run_search(book, &query, None).map(|_| false)
            }
        }
        MenuOption::Show => {
            let identifier = prompt_for_input("note: ")?;
            if identifier.is_empty() {
                return Ok(false);
            }
            run_show(book, &identifier).map(|_| false)
        }
        MenuOption::Add => run_add(book, None, None).map(|_| false),
        MenuOption::Toggle => {
            let identifier = prompt_for_input("note: ")?;
            if identifier.is_empty() {
                return Ok(false);
            }
            run_toggle(book, &identifier).map(|_| false)
        }
        MenuOption::Edit => {
            let identifier = prompt_for_input("note: ")?;
            if identifier.is_empty() {
                return Ok(false);
            }
            run_edit(book, &identifier, None, None).map(|_| false)
        }
        MenuOption::Delete => {
            let identifier = prompt_for_input("note: ")?;
            if identifier.is_empty() {
                return Ok(false);
            }
            run_delete(book, &identifier, false).map(|_| false)
        }
        MenuOption::Export => {
            let file = prompt_for_input("file: ")?;
            if file.is_empty() {
                return Ok(false);
            }
            run_export(book, Some(file.into())).map(|_| false)
        }
        MenuOption::Import => {
            let file = prompt_for_input("file: ")?;
            if file.is_empty() {
                return Ok(false);
            }
            run_import(book, &file).map(|_| false)
        }
        MenuOption::Quit => Ok(true),
    }
}

/// Prompt for text input, returning empty string on cancel
fn prompt_for_input(label: &str) -> Result<String> {
    let result = Text::new(label)
        .with_render_config(minimal_render_config())
        .prompt_skippable()?;
    Ok(result.unwrap_or_default())
}

/// Wait for user to press enter to continue
fn wait_for_continue() {
    println!();
    let _ = Text::new("[enter]")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}
