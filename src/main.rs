//! curaq-tui - Entry Point

use clap::{Parser, Subcommand};
use curaq_tui::api::{HttpApiClient, HttpContentExtractor};
use curaq_tui::commands;
use curaq_tui::config::{self, ConfigStore, FileConfigStore};
use curaq_tui::view::{self, ColorConfig, Services, SystemDesktop};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Width used for printed panels when stdout is not a terminal.
const FALLBACK_WIDTH: usize = 80;

/// curaq-tui - read and curate saved CuraQ articles from the terminal
#[derive(Parser, Debug)]
#[command(name = "curaq-tui")]
#[command(version)]
#[command(about = "Terminal client for reading and curating saved CuraQ articles")]
pub struct Args {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand; starts the TUI when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Prompt for an API token and save it
    Setup,
    /// Show the current configuration
    Config,
    /// Set the colour theme (interactive picker without a name)
    Theme {
        /// Theme name
        name: Option<String>,
    },
    /// Show or set the start screen
    StartScreen {
        /// `unread` or `read`
        screen: Option<String>,
    },
    /// Remove the saved token
    Clear,
    /// Search saved articles
    Search {
        /// Search query
        query: String,
        /// Use semantic search
        #[arg(long)]
        semantic: bool,
    },
    /// List discovery recommendations
    Discovery {
        /// Dismiss the recommendation with this id
        #[arg(long, value_name = "ID")]
        dismiss: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging is best effort; a read-only state dir must not block the CLI.
    let log_path = config::default_log_path();
    if let Err(e) = curaq_tui::logging::init(&log_path) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let store = FileConfigStore::new(config::resolve_config_path(args.config.clone())?);
    let location = store.path().display().to_string();
    info!(config = %location, command = ?args.command, "Starting");

    let mut out = io::stdout().lock();
    match args.command {
        Some(Command::Setup) => {
            let token = commands::prompt_token()?;
            commands::setup(&store, &token, &location, &mut out)?;
        }
        Some(Command::Config) => {
            let token = config::resolve_token(&store.load()?);
            commands::show_config(&store, token, &location, &mut out)?;
        }
        Some(Command::Theme { name: Some(name) }) => {
            commands::set_theme(&store, &name, &mut out)?;
        }
        Some(Command::Theme { name: None }) => {
            let current = store.load()?.theme_name();
            if let Some(theme) = commands::prompt_theme(current)? {
                commands::save_theme(&store, theme, &mut out)?;
            }
        }
        Some(Command::StartScreen { screen }) => {
            commands::start_screen(&store, screen.as_deref(), &mut out)?;
        }
        Some(Command::Clear) => commands::clear(&store, &mut out)?,
        Some(Command::Search { query, semantic }) => {
            let api = api_client(&store)?;
            commands::search(&api, &query, semantic, terminal_width(), &mut out)?;
        }
        Some(Command::Discovery { dismiss }) => {
            let api = api_client(&store)?;
            commands::discovery(&api, dismiss.as_deref(), terminal_width(), &mut out)?;
        }
        None => {
            drop(out);
            run_tui(store, args.no_color)?;
        }
    }

    Ok(())
}

/// Start the TUI, asking for a token first when none is configured.
fn run_tui(store: FileConfigStore, no_color: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load()?;
    let token = match config::resolve_token(&config) {
        Some(resolved) => resolved.token,
        None => {
            println!("Welcome to curaq-tui!");
            println!();
            println!("No API token found. Create one in CuraQ settings and paste it below.");
            let token = commands::prompt_token()?;
            let location = store.path().display().to_string();
            commands::setup(&store, &token, &location, &mut io::stdout())?;
            if token.is_empty() {
                return Ok(());
            }
            token
        }
    };

    let services = Services {
        api: Arc::new(HttpApiClient::new(&config::api_base_url(), &token)?),
        extractor: Arc::new(HttpContentExtractor::new()?),
        desktop: Arc::new(SystemDesktop),
    };
    let theme = config.theme_name();
    view::run(
        services,
        Box::new(store),
        theme,
        ColorConfig::from_env_and_args(no_color),
    )?;
    Ok(())
}

fn api_client(store: &FileConfigStore) -> Result<HttpApiClient, Box<dyn std::error::Error>> {
    let resolved = config::resolve_token(&store.load()?)
        .ok_or(curaq_tui::model::AppError::MissingToken)?;
    Ok(HttpApiClient::new(&config::api_base_url(), &resolved.token)?)
}

fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(w, _)| usize::from(w))
        .unwrap_or(FALLBACK_WIDTH)
}
