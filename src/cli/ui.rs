//! Shared UI primitives for notecmd
//!
//! Design principles:
//! - Minimal: Show only what's needed
//! - Clean: No decorative borders or lines
//! - Consistent: Same patterns everywhere
//!
//! Conventions:
//! - Prompts: lowercase with colon and space: `search: `
//! - Navigation hints: arrows in brackets: `[↑/↓]`
//! - Feedback: single word when possible: `Saved.`

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Confirm, InquireError, Select, Text};
use std::io::{self, Write};

use crate::models::Note;
use crate::notebook::Notebook;

// ============================================================================
// Terminal Helpers
// ============================================================================

/// Clear the terminal screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

/// Get terminal dimensions, defaulting to 80x24 if unavailable
pub fn term_size() -> (usize, usize) {
    crossterm::terminal::size()
        .map(|(w, h)| (w as usize, h as usize))
        .unwrap_or((80, 24))
}

/// Get number of visible content lines for scrollable lists.
/// Accounts for header (2 lines) and status bar (2 lines).
pub fn visible_lines() -> usize {
    let (_, height) = term_size();
    height.saturating_sub(4).max(5)
}

/// Get a minimal render config for inquire prompts
pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// RAII guard that ensures raw mode is disabled on drop
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Wait for any key press, accepting Enter, q, or Esc
pub fn wait_for_key() -> Result<()> {
    let _guard = RawModeGuard::new()?;
    loop {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            if matches!(code, KeyCode::Enter | KeyCode::Char('q') | KeyCode::Esc) {
                break;
            }
        }
    }
    Ok(())
}

// ============================================================================
// Layout Primitives
// ============================================================================

/// Truncate a string to max_chars, adding ellipsis if needed
pub fn truncate(s: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ============================================================================
// Status Bar Builder
// ============================================================================

/// Builder for consistent status bar formatting.
///
/// Example output: "3/12  [n]ew [c]heck [q]uit"
pub struct StatusBar<'a> {
    counter: Option<(usize, usize)>,
    actions: Vec<(&'a str, &'a str)>,
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self {
            counter: None,
            actions: Vec::new(),
        }
    }

    /// Add a counter (current/total)
    pub fn counter(mut self, current: usize, total: usize) -> Self {
        self.counter = Some((current, total));
        self
    }

    /// Add an action hint (key, label)
    /// Example: `.action("e", "dit")` produces `[e]dit`
    pub fn action(mut self, key: &'a str, label: &'a str) -> Self {
        self.actions.push((key, label));
        self
    }

    /// Render the status bar to a string.
    /// Auto-switches to a two-line format for narrow terminals.
    pub fn render(&self) -> String {
        let full = self.render_full();
        let (width, _) = term_size();

        if full.len() > width.saturating_sub(5) {
            let counter = self
                .counter
                .map(|(c, t)| format!("{}/{}", c, t))
                .unwrap_or_default();
            format!("{}\n{}", counter, self.render_actions())
        } else {
            full
        }
    }

    fn render_full(&self) -> String {
        let mut result = String::new();
        if let Some((current, total)) = self.counter {
            use std::fmt::Write;
            let _ = write!(result, "{}/{}", current, total);
        }
        let actions = self.render_actions();
        if !actions.is_empty() {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(&actions);
        }
        result
    }

    fn render_actions(&self) -> String {
        let mut result = String::new();
        for (key, label) in &self.actions {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push('[');
            result.push_str(key);
            result.push(']');
            result.push_str(label);
        }
        result
    }
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Form Input Helpers
// ============================================================================

/// Result type for form inputs that can be cancelled
pub enum FormResult<T> {
    Value(T),
    Cancelled,
}

/// Prompt for a field with optional current value
/// Format: `field [current]: ` or `field: ` if no current value
/// Empty input returns the current value (or empty string if no current);
/// `-` clears an existing value.
pub fn prompt_field(field: &str, current: Option<&str>) -> Result<FormResult<String>> {
    let has_value = current.map(|v| !v.is_empty()).unwrap_or(false);
    let prompt = match current {
        Some(val) if !val.is_empty() => {
            format!("{} [{}] (- clears): ", field, truncate(val, 30))
        }
        _ => format!("{}: ", field),
    };

    let result = Text::new(&prompt)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(input) => {
            let input = input.trim();
            if input == "-" && has_value {
                Ok(FormResult::Value(String::new()))
            } else if input.is_empty() {
                Ok(FormResult::Value(current.unwrap_or("").to_string()))
            } else {
                Ok(FormResult::Value(input.to_string()))
            }
        }
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prompt for an optional field (returns empty string if skipped)
pub fn prompt_field_optional(field: &str) -> Result<FormResult<String>> {
    let prompt = format!("{}: ", field);

    let result = Text::new(&prompt)
        .with_render_config(minimal_render_config())
        .prompt();

    match result {
        Ok(input) => Ok(FormResult::Value(input.trim().to_string())),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            Ok(FormResult::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prompt for yes/no confirmation (default: no)
pub fn confirm(prompt: &str) -> Result<bool> {
    let result = Confirm::new(prompt)
        .with_render_config(minimal_render_config())
        .with_default(false)
        .prompt()?;
    Ok(result)
}

/// Multi-line input in raw mode. Type normally; Enter starts a new line;
/// Escape opens a command line where the action key confirms, `q` cancels,
/// and `r` returns to editing. Returns None when cancelled or empty.
///
/// action_label: e.g. "save" - first char is the hotkey
pub fn multiline_input(prompt: &str, action_label: &str) -> Result<Option<String>> {
    println!("{}", prompt);
    println!();

    let mut stdout = io::stdout();
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    let mut command_mode = false;

    let action_char = action_label.chars().next().unwrap_or('s').to_ascii_lowercase();
    let action_display = format!("[{}]{}", action_char, &action_label[1..]);

    {
        let _guard = RawModeGuard::new()?;

        loop {
            let Event::Key(KeyEvent { code, modifiers, .. }) = event::read()? else {
                continue;
            };

            if command_mode {
                match code {
                    KeyCode::Char(c) if c.to_ascii_lowercase() == action_char => {
                        write!(stdout, "\r\n")?;
                        stdout.flush()?;
                        break;
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        write!(stdout, "\r\n")?;
                        stdout.flush()?;
                        return Ok(None);
                    }
                    KeyCode::Esc | KeyCode::Char('r') | KeyCode::Char('R') => {
                        command_mode = false;
                        // Clear the command menu and reprint the current line
                        write!(stdout, "\x1b[2A\r\x1b[J{}", current_line)?;
                        stdout.flush()?;
                    }
                    _ => {}
                }
            } else {
                match code {
                    KeyCode::Esc => {
                        command_mode = true;
                        write!(stdout, "\r\n\n{} [q]uit [r]eturn: ", action_display)?;
                        stdout.flush()?;
                    }
                    KeyCode::Enter => {
                        lines.push(current_line.clone());
                        current_line.clear();
                        write!(stdout, "\r\n")?;
                        stdout.flush()?;
                    }
                    KeyCode::Backspace => {
                        if !current_line.is_empty() {
                            current_line.pop();
                            write!(stdout, "\x08 \x08")?;
                            stdout.flush()?;
                        } else if let Some(prev) = lines.pop() {
                            current_line = prev;
                            write!(stdout, "\x1b[A\r\x1b[K{}", current_line)?;
                            stdout.flush()?;
                        }
                    }
                    KeyCode::Char(c) => {
                        if c == 'c' && modifiers.contains(KeyModifiers::CONTROL) {
                            write!(stdout, "\r\n")?;
                            stdout.flush()?;
                            return Ok(None);
                        }
                        current_line.push(c);
                        write!(stdout, "{}", c)?;
                        stdout.flush()?;
                    }
                    _ => {}
                }
            }
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }
    while lines.last().map(|s| s.is_empty()).unwrap_or(false) {
        lines.pop();
    }

    if lines.is_empty() {
        return Ok(None);
    }
    Ok(Some(lines.join("\n")))
}

// ============================================================================
// Note Lookup Helpers
// ============================================================================

/// Format a note for selection display: "title (done, Aug 6)"
fn format_note_for_select(note: &Note) -> String {
    let title = if note.title.is_empty() {
        truncate(note.preview(), 40)
    } else {
        truncate(&note.title, 40)
    };
    let state = if note.completed { "done" } else { "pending" };
    format!(
        "{} ({}, {})",
        title,
        state,
        super::display::format_short_date(note.updated_at)
    )
}

/// Display a note selection menu using inquire Select.
/// Returns the selected note's id or None if cancelled.
pub fn select_note(notes: &[&Note]) -> Result<Option<String>> {
    if notes.is_empty() {
        return Ok(None);
    }

    if notes.len() == 1 {
        return Ok(Some(notes[0].id.clone()));
    }

    let options: Vec<String> = notes.iter().map(|n| format_note_for_select(n)).collect();

    let result = Select::new("Select:", options.clone())
        .with_render_config(minimal_render_config())
        .with_page_size(visible_lines())
        .with_vim_mode(true)
        .prompt_skippable()?;

    match result {
        Some(selected) => {
            let idx = options.iter().position(|o| *o == selected).unwrap_or(0);
            Ok(Some(notes[idx].id.clone()))
        }
        None => Ok(None),
    }
}

/// Minimum identifier length accepted as an id prefix
const MIN_ID_PREFIX: usize = 6;

/// Find a note by id or title/content search.
/// - An exact id match wins outright
/// - An unambiguous id prefix (at least 6 chars) matches directly
/// - Otherwise the identifier is a case-insensitive substring search, with a
///   selection prompt when it is ambiguous
/// Returns the note's id, or None if nothing matched or selection was
/// cancelled.
pub fn find_note_by_identifier(book: &Notebook, identifier: &str) -> Result<Option<String>> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Ok(None);
    }

    if let Some(note) = book.get(identifier) {
        return Ok(Some(note.id.clone()));
    }

    if identifier.len() >= MIN_ID_PREFIX {
        let mut prefixed = book.notes().iter().filter(|n| n.id.starts_with(identifier));
        if let Some(note) = prefixed.next() {
            if prefixed.next().is_none() {
                return Ok(Some(note.id.clone()));
            }
        }
    }

    let matches = book.visible(identifier, crate::models::Filter::All);
    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].id.clone())),
        _ => select_note(&matches),
    }
}
