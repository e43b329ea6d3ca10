//! debarchive CLI
//!
//! Lists, searches and pages through archived package snapshots.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use debarchive::{
    error::Result,
    models::Config,
    sources,
    view::{LoadState, PresentationState, TableRenderer},
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// debarchive - Archived Package Browser
#[derive(Parser, Debug)]
#[command(
    name = "debarchive",
    version,
    about = "Browse archived package snapshots"
)]

struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "debarchive.toml")]
    config: PathBuf,

    /// Dataset URL or path (overrides source.location)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    View(ViewCommand),

    /// Validate configuration file
    Validate,
}

/// Commands that load the dataset and present it.
#[derive(Subcommand, Debug)]
enum ViewCommand {
    /// Print one page of the listing
    List {
        /// Case-insensitive search over package and snapshot URLs
        #[arg(short, long, default_value = "")]
        query: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Records per page (default: view.page_size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Print the page view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print available/unavailable counts
    Summary {
        /// Case-insensitive search over package and snapshot URLs
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Browse interactively (commands read from stdin)
    Browse,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(cli.verbose, &level);

    let mut config = loaded.unwrap_or_else(|e| {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config.display(),
            e
        );
        Config::default()
    });
    if let Some(location) = cli.source {
        config.source.location = location;
    }

    match cli.command {
        Command::Validate => validate(&config),
        Command::View(command) => run(command, &config).await,
    }
}

/// Validate the effective configuration.
fn validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");
    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }
    log::info!("✓ Config OK (source: {})", config.source.location);
    Ok(())
}

/// Load the dataset once, then serve the requested view.
async fn run(command: ViewCommand, config: &Config) -> Result<()> {
    config.validate()?;

    let source = sources::open_source(&config.source.location, &config.source)?;
    let mut state = PresentationState::new(config.view.page_size);
    if state.load(source.as_ref()).await == LoadState::Failed {
        eprintln!("Dataset could not be loaded; the listing is empty.");
    }
    let renderer = TableRenderer::from_config(&config.view);

    match command {
        ViewCommand::List {
            query,
            page,
            page_size,
            json,
        } => {
            if let Some(page_size) = page_size {
                state.set_page_size(page_size);
            }
            state.set_query(query);
            state.set_page(page);

            let view = state.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", renderer.render(&view));
            }
        }

        ViewCommand::Summary { query } => {
            state.set_query(query);
            let view = state.view();
            println!("{}", renderer.summary_line(&view));
        }

        ViewCommand::Browse => browse(&mut state, &renderer).await?,
    }

    Ok(())
}

/// One line of input in browse mode.
#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Search(String),
    Page(usize),
    Size(usize),
    Next,
    Prev,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl BrowseCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        if let Some(query) = line.strip_prefix('/') {
            return Self::Search(query.trim().to_string());
        }

        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match word {
            "search" | "s" => Self::Search(rest.to_string()),
            "page" | "p" => rest
                .parse()
                .map(Self::Page)
                .unwrap_or_else(|_| Self::Unknown(line.to_string())),
            "size" => rest
                .parse()
                .map(Self::Size)
                .unwrap_or_else(|_| Self::Unknown(line.to_string())),
            "next" | "n" | "" => Self::Next,
            "prev" | "b" => Self::Prev,
            "clear" => Self::Clear,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

const BROWSE_HELP: &str = "Commands: /TEXT or search TEXT, page N, size N, next (or Enter), prev, clear, quit";

/// Interactive loop: apply each command, then redraw.
async fn browse(state: &mut PresentationState, renderer: &TableRenderer) -> Result<()> {
    println!("{}", renderer.render(&state.view()));
    println!("{BROWSE_HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match BrowseCommand::parse(&line) {
            BrowseCommand::Search(query) => state.set_query(query),
            BrowseCommand::Page(page) => state.set_page(page),
            BrowseCommand::Size(size) => state.set_page_size(size),
            BrowseCommand::Next => state.next_page(),
            BrowseCommand::Prev => state.previous_page(),
            BrowseCommand::Clear => state.set_query(""),
            BrowseCommand::Help => {
                println!("{BROWSE_HELP}");
                continue;
            }
            BrowseCommand::Quit => break,
            BrowseCommand::Unknown(input) => {
                println!("Unknown command: {input}. {BROWSE_HELP}");
                continue;
            }
        }
        println!("{}", renderer.render(&state.view()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_commands() {
        let cli = Cli::try_parse_from(["debarchive", "list", "--query", "winter", "--page", "2"]).unwrap();
        match cli.command {
            Command::View(ViewCommand::List { query, page, page_size, json }) => {
                assert_eq!(query, "winter");
                assert_eq!(page, 2);
                assert_eq!(page_size, None);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["debarchive", "validate"]).unwrap();
        assert!(matches!(cli.command, Command::Validate));

        let cli = Cli::try_parse_from(["debarchive", "browse", "--source", "db.json"]).unwrap();
        assert!(matches!(cli.command, Command::View(ViewCommand::Browse)));
        assert_eq!(cli.source.as_deref(), Some("db.json"));
    }

    #[test]
    fn test_parse_browse_commands() {
        assert_eq!(
            BrowseCommand::parse("/WinterBoard"),
            BrowseCommand::Search("WinterBoard".to_string())
        );
        assert_eq!(
            BrowseCommand::parse("search sbsettings"),
            BrowseCommand::Search("sbsettings".to_string())
        );
        assert_eq!(BrowseCommand::parse("page 3"), BrowseCommand::Page(3));
        assert_eq!(BrowseCommand::parse("size 50"), BrowseCommand::Size(50));
        assert_eq!(BrowseCommand::parse(""), BrowseCommand::Next);
        assert_eq!(BrowseCommand::parse("q"), BrowseCommand::Quit);
        assert_eq!(
            BrowseCommand::parse("page x"),
            BrowseCommand::Unknown("page x".to_string())
        );
    }
}
