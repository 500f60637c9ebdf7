use chrono::{DateTime, Datelike, Local, Timelike, Utc};

use crate::cli::ui::truncate;
use crate::models::Note;

/// Print a full note card with clean formatting (only non-empty fields)
pub fn print_note(note: &Note) {
    // Header - title, or first content line when untitled
    if note.title.is_empty() {
        println!("(untitled)\n");
    } else {
        println!("{}\n", note.title);
    }

    if !note.content.is_empty() {
        for line in note.content.lines() {
            println!("  {}", line);
        }
        println!();
    }

    let state = if note.completed { "done" } else { "pending" };
    println!("  {}", state);
    println!("  created {}", format_note_date(note.created_at));
    if note.updated_at != note.created_at {
        println!("  edited {}", format_note_date(note.updated_at));
    }
    println!("  id {}", note.id);
}

/// Print a single note row: checkbox, title, preview, date
pub fn print_note_row(note: &Note, title_width: usize) {
    let checkbox = if note.completed { "[x]" } else { "[ ]" };
    let title = if note.title.is_empty() {
        truncate(note.preview(), title_width)
    } else {
        truncate(&note.title, title_width)
    };
    println!(
        "{}  {:<width$}  {}",
        checkbox,
        title,
        format_short_date(note.updated_at),
        width = title_width
    );
}

/// Format a note date for display
pub fn format_note_date(date: DateTime<Utc>) -> String {
    let date = date.with_timezone(&Local);
    let now = Local::now();
    let today = now.date_naive();
    let note_date = date.date_naive();

    let (pm, hour) = date.hour12();
    let clock = format!("{}:{:02}{}", hour, date.minute(), if pm { "pm" } else { "am" });

    if note_date == today {
        format!("Today at {}", clock)
    } else if note_date == today.pred_opt().unwrap_or(today) {
        format!("Yesterday at {}", clock)
    } else if date.year() == now.year() {
        format!("{} {} at {}", month_abbrev(date.month()), date.day(), clock)
    } else {
        format!(
            "{} {}, {} at {}",
            month_abbrev(date.month()),
            date.day(),
            date.year(),
            clock
        )
    }
}

/// Format a date for short display in rows
pub fn format_short_date(date: DateTime<Utc>) -> String {
    let date = date.with_timezone(&Local);
    let now = Local::now();
    if date.date_naive() == now.date_naive() {
        "today".to_string()
    } else if date.year() == now.year() {
        format!("{} {}", month_abbrev(date.month()), date.day())
    } else {
        format!("{} {}, {}", month_abbrev(date.month()), date.day(), date.year())
    }
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan", 2 => "Feb", 3 => "Mar", 4 => "Apr",
        5 => "May", 6 => "Jun", 7 => "Jul", 8 => "Aug",
        9 => "Sep", 10 => "Oct", 11 => "Nov", 12 => "Dec",
        _ => "???",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_note_does_not_panic() {
        let mut note = Note::new("Title".to_string(), "line one\nline two".to_string());
        print_note(&note);

        note.completed = true;
        note.title.clear();
        print_note(&note);
    }

    #[test]
    fn test_print_note_row_does_not_panic() {
        let note = Note::new(String::new(), "preview only".to_string());
        print_note_row(&note, 40);
    }

    #[test]
    fn test_format_note_date_today() {
        let formatted = format_note_date(Utc::now());
        assert!(formatted.starts_with("Today at "));
    }

    #[test]
    fn test_format_short_date_today() {
        assert_eq!(format_short_date(Utc::now()), "today");
    }

    #[test]
    fn test_format_note_date_past_year() {
        let old = DateTime::parse_from_rfc3339("2019-03-05T10:15:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let formatted = format_note_date(old);
        assert!(formatted.contains("2019"));
        assert!(formatted.starts_with("Mar"));
    }
}
