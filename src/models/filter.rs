use crate::models::Note;

/// Three-way visibility selector for the note list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    /// Parse a filter name. `active` is the historical spelling of `pending`;
    /// anything unrecognized falls back to `all`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "completed" | "done" => Self::Completed,
            "pending" | "active" => Self::Pending,
            _ => Self::All,
        }
    }

    /// Next filter in the cycle all -> pending -> completed -> all
    pub fn cycle(self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Self::All => true,
            Self::Completed => note.completed,
            Self::Pending => !note.completed,
        }
    }
}

/// Derive the visible subset of `notes`: case-insensitive substring match of
/// `query` against title or content, intersected with the filter predicate.
/// Pure; preserves source order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str, filter: Filter) -> Vec<&'a Note> {
    let query = query.trim().to_lowercase();
    notes
        .iter()
        .filter(|note| {
            let matches_query = query.is_empty()
                || note.title.to_lowercase().contains(&query)
                || note.content.to_lowercase().contains(&query);
            matches_query && filter.matches(note)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_notes() -> Vec<Note> {
        let mut notes: Vec<Note> = (1..=4)
            .map(|i| {
                Note::new(
                    format!("Sample Note {}", i),
                    format!("This is the content of sample note {}.", i),
                )
            })
            .collect();
        notes.push(Note::new("Other".to_string(), "Unrelated".to_string()));
        notes
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("completed"), Filter::Completed);
        assert_eq!(Filter::parse("pending"), Filter::Pending);
        // Historical spelling
        assert_eq!(Filter::parse("active"), Filter::Pending);
        assert_eq!(Filter::parse("ACTIVE"), Filter::Pending);
        assert_eq!(Filter::parse("unknown"), Filter::All);
        assert_eq!(Filter::parse(""), Filter::All);
    }

    #[test]
    fn test_filter_roundtrip() {
        for filter in [Filter::All, Filter::Completed, Filter::Pending] {
            assert_eq!(Filter::parse(filter.as_str()), filter);
        }
    }

    #[test]
    fn test_filter_cycle() {
        assert_eq!(Filter::All.cycle(), Filter::Pending);
        assert_eq!(Filter::Pending.cycle(), Filter::Completed);
        assert_eq!(Filter::Completed.cycle(), Filter::All);
    }

    #[test]
    fn test_search_matches_title_and_content_in_order() {
        let notes = sample_notes();
        let visible = filter_notes(&notes, "sample", Filter::All);

        assert_eq!(visible.len(), 4);
        for (i, note) in visible.iter().enumerate() {
            assert_eq!(note.title, format!("Sample Note {}", i + 1));
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let notes = sample_notes();
        assert_eq!(filter_notes(&notes, "SAMPLE", Filter::All).len(), 4);
        assert_eq!(filter_notes(&notes, "unRELated", Filter::All).len(), 1);
    }

    #[test]
    fn test_filter_intersects_search() {
        let mut notes = sample_notes();
        notes[0].completed = true;
        notes[2].completed = true;

        let done = filter_notes(&notes, "sample", Filter::Completed);
        assert_eq!(done.len(), 2);
        assert_eq!(done[0].title, "Sample Note 1");
        assert_eq!(done[1].title, "Sample Note 3");

        let pending = filter_notes(&notes, "sample", Filter::Pending);
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].title, "Sample Note 2");
        assert_eq!(pending[1].title, "Sample Note 4");
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let notes = sample_notes();
        assert_eq!(filter_notes(&notes, "", Filter::All).len(), 5);
        assert_eq!(filter_notes(&notes, "   ", Filter::All).len(), 5);
    }
}
