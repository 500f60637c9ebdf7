pub mod filter;
pub mod note;

pub use filter::{filter_notes, Filter};
pub use note::{Note, MAX_CONTENT_CHARS, MAX_TITLE_CHARS, NOTE_COLORS};
