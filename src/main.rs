use clap::Parser;
use notecmd::cli::{
    run_add, run_browse, run_delete, run_edit, run_export, run_import, run_list, run_menu,
    run_search, run_show, run_toggle, Cli, Commands,
};
use notecmd::models::Filter;
use notecmd::store::NoteStore;
use notecmd::Notebook;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let store = NoteStore::open()?;
    let mut book = Notebook::load(store)?;

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&mut book)?;
        }
        Some(Commands::List(args)) => {
            run_list(&book, args.filter, args.search)?;
        }
        Some(Commands::Browse(args)) => {
            let filter = args.filter.map(|f| Filter::parse(&f)).unwrap_or_default();
            run_browse(&mut book, filter, args.search.unwrap_or_default())?;
        }
        Some(Commands::Search(args)) => {
            run_search(&book, &args.query, args.filter)?;
        }
        Some(Commands::Show(args)) => {
            run_show(&book, &args.identifier)?;
        }
        Some(Commands::Add(args)) => {
            run_add(&mut book, args.title, args.content)?;
        }
        Some(Commands::Toggle(args)) => {
            run_toggle(&mut book, &args.identifier)?;
        }
        Some(Commands::Edit(args)) => {
            run_edit(&mut book, &args.identifier, args.title, args.content)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&mut book, &args.identifier, args.force)?;
        }
        Some(Commands::Export(args)) => {
            run_export(&book, args.output)?;
        }
        Some(Commands::Import(args)) => {
            run_import(&mut book, &args.file)?;
        }
    }

    Ok(())
}
