use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod browse;
pub mod delete;
pub mod display;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod menu;
pub mod search;
pub mod show;
pub mod toggle;
pub mod ui;

pub use add::run_add;
pub use browse::run_browse;
pub use delete::run_delete;
pub use edit::run_edit;
pub use export::run_export;
pub use import::run_import;
pub use list::run_list;
pub use menu::run_menu;
pub use search::run_search;
pub use show::run_show;
pub use toggle::run_toggle;

#[derive(Parser)]
#[command(name = "notecmd")]
#[command(about = "Notes and todos for the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes with filtering and search
    List(ListArgs),
    /// Browse notes interactively
    Browse(BrowseArgs),
    /// Search notes by title or content
    Search(SearchArgs),
    /// Show a note in full
    Show(ShowArgs),
    /// Add a new note
    Add(AddArgs),
    /// Toggle a note between done and pending
    Toggle(ToggleArgs),
    /// Edit a note's title or content
    Edit(EditArgs),
    /// Delete a note
    Delete(DeleteArgs),
    /// Export notes to CSV
    Export(ExportArgs),
    /// Import notes from CSV
    Import(ImportArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only "all", "completed", or "pending" notes
    #[arg(short, long)]
    pub filter: Option<String>,
    /// Show only notes whose title or content contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct BrowseArgs {
    /// Start with "all", "completed", or "pending" notes
    #[arg(short, long)]
    pub filter: Option<String>,
    /// Start with a search already applied
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search query (matched against title and content)
    pub query: String,
    /// Restrict to "all", "completed", or "pending" notes
    #[arg(short, long)]
    pub filter: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Note id, id prefix, or title text
    pub identifier: String,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub content: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Note id, id prefix, or title text
    pub identifier: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Note id, id prefix, or title text
    pub identifier: String,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub content: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Note id, id prefix, or title text
    pub identifier: String,
    /// Skip the confirmation prompt
    #[arg(short = 'f', long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// CSV file with title,content,completed columns
    pub file: String,
}
