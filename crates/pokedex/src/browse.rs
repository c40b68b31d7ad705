use std::sync::Arc;

use colored::Colorize;
use pokedex_core::filter::FilterSelection;
use pokedex_core::pagination::MAX_PAGE;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::PokeApiClient;
use crate::prelude::{eprintln, println, *};
use crate::render::{format_catalog_text, format_header, format_taxonomy_table};
use crate::session::CatalogSession;

/// Record whose sprite is shown in the browser header
pub const HEADER_ICON: &str = "pikachu";

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct BrowseOptions {
    /// Page to open on (1-indexed)
    #[arg(
        short,
        long,
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE))
    )]
    pub page: u32,
}

/// One line of browser input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Filter(FilterSelection),
    Types,
    Reload,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line typed at the browser prompt; blank lines are `None`
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "n" | "next" => Command::Next,
        "p" | "prev" | "previous" => Command::Previous,
        "f" | "filter" => Command::Filter(FilterSelection::new(rest)),
        "clear" => Command::Filter(FilterSelection::none()),
        "t" | "types" => Command::Types,
        "r" | "reload" => Command::Reload,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };

    Some(command)
}

pub async fn run(options: BrowseOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("PokéAPI base: {}", global.api_config().base_url);
    }

    let session = Arc::new(CatalogSession::new(Arc::new(PokeApiClient::new(
        global.api_config(),
    ))));
    session.pages().go_to(options.page);

    let watcher = tokio::spawn(render_on_change(session.clone()));

    let (_, icon) = session.mount(HEADER_ICON).await;
    print!("{}", format_header(HEADER_ICON, &icon));
    println!("{}", help_text());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Next => {
                if session.next_page().is_none() {
                    println!("{}", "Already on the last page.".yellow());
                }
            }
            Command::Previous => {
                if session.previous_page().is_none() {
                    println!("{}", "Already on the first page.".yellow());
                }
            }
            Command::Filter(selection) => {
                session.set_filter(selection);
                print!("{}", format_catalog_text(&session.view(), false));
            }
            Command::Types => {
                let entries = session.taxonomy();
                if entries.is_empty() {
                    println!("{}", "No types loaded.".yellow());
                } else {
                    format_taxonomy_table(&entries).printstd();
                }
            }
            Command::Reload => {
                session.reload();
            }
            Command::Help => println!("{}", help_text()),
            Command::Quit => break,
            Command::Unknown(input) => {
                eprintln!("{} {}", "Unknown command:".red(), input);
            }
        }
    }

    watcher.abort();
    Ok(())
}

/// Redraw the listing every time the store publishes a new state
async fn render_on_change(session: Arc<CatalogSession>) {
    let mut rx = session.store().subscribe();
    while rx.changed().await.is_ok() {
        rx.borrow_and_update();
        print!("{}", format_catalog_text(&session.view(), false));
    }
}

fn help_text() -> String {
    [
        ("n, next", "next page"),
        ("p, prev", "previous page"),
        ("f NAME", "show only a type or ability"),
        ("f, clear", "remove the filter"),
        ("t, types", "list the known types"),
        ("r, reload", "fetch the current page again"),
        ("h, help", "show this help"),
        ("q, quit", "leave"),
    ]
    .iter()
    .map(|(keys, what)| format!("  {:<10} {}", keys.cyan(), what))
    .collect::<Vec<_>>()
    .join("\n")
}
