// Film List CLI binary

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use anyhow::Result;

use film_list_lib::config::AppConfig;
use film_list_lib::watchlist::{Watchlist, WatchlistView};

#[derive(Parser)]
#[command(name = "filmlist")]
#[command(about = "Film List - A personal movie watchlist", long_about = None)]
#[command(version)]
struct Cli {
    /// Database file (defaults to FILMLIST_DB_PATH, then the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a movie to the watchlist
    Add {
        /// Movie title
        title: String,
        /// Genre
        #[arg(short, long, default_value = "")]
        genre: String,
    },

    /// List movies, newest first
    List {
        /// Only show titles or genres containing this text
        #[arg(short, long, default_value = "")]
        search: String,
        /// Print the rendered list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Flip a movie between Pending and Watched
    Toggle {
        /// Movie ID
        id: i64,
    },

    /// Delete a movie
    Delete {
        /// Movie ID
        id: i64,
    },

    /// Print the database path in use
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.db);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();
    config.report_warnings();

    let mut list = Watchlist::new(config.db_path);

    match cli.command {
        Commands::Add { title, genre } => cmd_add(&mut list, &title, &genre),
        Commands::List { search, json } => cmd_list(&mut list, &search, json),
        Commands::Toggle { id } => cmd_toggle(&mut list, id),
        Commands::Delete { id } => cmd_delete(&mut list, id),
        Commands::Path => {
            println!("{}", list.db_path().display());
            Ok(())
        }
    }
}

fn cmd_add(list: &mut Watchlist, title: &str, genre: &str) -> Result<()> {
    let view = list.add(title, genre)?;
    println!("Added '{}'", title.trim());
    println!();
    print_view(&view);
    Ok(())
}

fn cmd_list(list: &mut Watchlist, search: &str, json: bool) -> Result<()> {
    let view = list.set_search(search)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }
    Ok(())
}

fn cmd_toggle(list: &mut Watchlist, id: i64) -> Result<()> {
    let view = list.toggle(id)?;
    if let Some(row) = view.rows.iter().find(|r| r.id == id) {
        println!("Movie {} is now {}", id, row.status);
    }
    println!();
    print_view(&view);
    Ok(())
}

fn cmd_delete(list: &mut Watchlist, id: i64) -> Result<()> {
    let view = list.delete(id)?;
    println!("Deleted movie {}", id);
    println!();
    print_view(&view);
    Ok(())
}

// --- Helper Functions ---

fn print_view(view: &WatchlistView) {
    println!("Your Collection: {} movies ({} watched)", view.total, view.watched);
    println!();

    if view.rows.is_empty() {
        if view.is_filtered() {
            println!("No movies match '{}'.", view.search);
        } else {
            println!("No movies yet. Use 'filmlist add <title>' to add one.");
        }
        return;
    }

    println!("{:>5}  {:>8}  {}", "ID", "Status", "Movie");
    println!("{}", "-".repeat(50));

    for row in &view.rows {
        println!("{:>5}  {:>8}  {}", row.id, row.status, row.label);
    }

    if view.is_filtered() {
        println!();
        println!("Showing {} of {} movies matching '{}'.", view.rows.len(), view.total, view.search);
    }
}
