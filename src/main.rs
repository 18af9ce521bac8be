//! Command-line front end for the catalog engine.
//!
//! Serves listings from a directory of TMDB-shaped JSON pages and prints every
//! view model as text. Commands are read line by line from stdin.
//!
//! # Usage
//!
//! ```text
//! visionary <fixture-dir> [config.toml]
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   Intent    ┌──────────────────────────┐
//! │  stdin thread    │ ──(mpsc)──▶ │  driver (current thread) │ ──▶ render_text → stdout
//! └──────────────────┘             └──────────────────────────┘
//! ```
//!
//! Stdin is read on a plain thread so blocking reads never stall the runtime.
//! `quit` or end of input closes the channel; the driver then lets in-flight
//! fetches settle and the process exits.
//!
//! # Commands
//!
//! - `next`: Load the next page
//! - `fav <movie|tv> <id>`: Toggle a favorite
//! - `sort <title|rating|date> <asc|desc>`: Change the sort
//! - `view all` / `view favorites`: Change the view mode
//! - `films` / `series`: Switch collection
//! - `search <text>`: Debounced search; `search` alone restores the listing
//! - `retry`: Repeat a failed load
//! - `quit`: Exit

use std::io::BufRead;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use visionary::app::driver;
use visionary::provider::FixtureCatalog;
use visionary::ui::render_text;
use visionary::{
    initialize, observability, CollectionId, Config, FavoriteKey, Intent, MediaKind, SortKey, SortOrder, SortSpec,
    ViewMode, ViewModel,
};

const INTENT_BUFFER: usize = 32;

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Intent(Intent),
    Quit,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(fixture_dir) = args.next() else {
        eprintln!("usage: visionary <fixture-dir> [config.toml]");
        return ExitCode::from(2);
    };

    let config = match args.next() {
        Some(path) => match Config::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: could not load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    observability::init_tracing(&config);

    let catalog = match FixtureCatalog::from_dir(Path::new(&fixture_dir)) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: could not load fixtures from {fixture_dir}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let engine = initialize(
        &config,
        Arc::new(catalog),
        Box::new(|vm: &ViewModel| println!("{}", render_text(vm))),
    );

    let (tx, rx) = mpsc::channel(INTENT_BUFFER);
    std::thread::spawn(move || read_commands(&tx));

    let engine = driver::run(engine, rx).await;

    if let Some(warning) = engine.persistence_warning() {
        eprintln!("warning: favorites were not saved: {warning}");
    }
    ExitCode::SUCCESS
}

fn read_commands(tx: &mpsc::Sender<Intent>) {
    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Intent(intent)) => {
                if tx.blocking_send(intent).is_err() {
                    break;
                }
            }
            Err(message) => eprintln!("{message}"),
        }
    }
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let mut args = rest.split_whitespace();

    let intent = match word {
        "quit" | "q" => return Ok(Command::Quit),
        "next" | "n" => Intent::RequestNextPage,
        "retry" => Intent::Retry,
        "films" => Intent::SelectCollection(CollectionId::PopularFilms),
        "series" => Intent::SelectCollection(CollectionId::PopularSeries),
        "search" => Intent::SubmitSearch(rest.to_string()),
        "fav" => {
            let kind = args
                .next()
                .and_then(MediaKind::parse)
                .ok_or("usage: fav <movie|tv> <id>")?;
            let id = args
                .next()
                .and_then(|id| id.parse::<u64>().ok())
                .ok_or("usage: fav <movie|tv> <id>")?;
            Intent::ToggleFavorite(FavoriteKey::new(id, kind))
        }
        "sort" => {
            let key = args
                .next()
                .and_then(SortKey::parse)
                .ok_or("usage: sort <title|rating|date> [asc|desc]")?;
            let order = match args.next() {
                Some(order) => SortOrder::parse(order).ok_or("usage: sort <title|rating|date> [asc|desc]")?,
                None => SortOrder::Descending,
            };
            Intent::ChangeSort(SortSpec::new(key, order))
        }
        "view" => match args.next() {
            Some("all") => Intent::ChangeViewMode(ViewMode::All),
            Some("favorites" | "favs") => Intent::ChangeViewMode(ViewMode::FavoritesOnly),
            _ => return Err("usage: view <all|favorites>".to_string()),
        },
        other => return Err(format!("unknown command: {other}")),
    };

    Ok(Command::Intent(intent))
}
