use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum title length in characters
pub const MAX_TITLE_CHARS: usize = 120;

/// Maximum content length in characters
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// Pastel palette for note cards
pub const NOTE_COLORS: &[&str] = &[
    "#ffcdd2", "#f8bbd0", "#e1bee7", "#d1c4e9", "#c5cae9", "#bbdefb", "#b3e5fc", "#b2ebf2",
    "#b2dfdb", "#c8e6c9", "#dcedc8", "#f0f4c3", "#fff9c4", "#ffecb3", "#ffe0b2", "#ffccbc",
];

/// A single note. Serialized field names are the persisted wire names:
/// `time` holds the creation timestamp, `lastModified` the last mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub completed: bool,
    #[serde(rename = "time")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "lastModified")]
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Note {
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: clamp_chars(&title, MAX_TITLE_CHARS),
            content: clamp_chars(&content, MAX_CONTENT_CHARS),
            completed: false,
            created_at: now,
            updated_at: now,
            color: None,
        }
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// First line of the content, for list rows
    pub fn preview(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}

/// Pick a random card color from the palette
pub fn random_color() -> &'static str {
    NOTE_COLORS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("#c8e6c9")
}

/// Cap a string at `max` characters, cutting on a char boundary
pub fn clamp_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
