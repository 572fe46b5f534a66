//! CLI definitions and handlers.
//!
//! Running without a subcommand starts the interactive menu:
//! - `url-checker` - Interactive menu (check / view / exit)
//! - `url-checker check <url>` - Check one URL non-interactively
//! - `url-checker results` - List or export recorded results

mod check;
mod menu;
mod results;

pub use check::CheckCommand;
pub use menu::{Menu, MenuChoice, MenuState};
pub use results::ResultsCommand;

use crate::checker::HttpsChecker;
use crate::config::{resolve_data_file, AppSettings};
use crate::error::CliResult;
use crate::storage::ResultStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::BufReader;

/// url-checker - Check whether URLs are reachable and keep a log.
///
/// A URL counts as accessible only if it answers a single GET request with
/// HTTP 200. Every other outcome, including network failures, is recorded
/// as blocked.
#[derive(Parser, Debug)]
#[command(name = "url-checker")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check URL reachability and keep a log of results", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (interactive menu if omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Results file (defaults to url_checks.json beside the executable)
    #[arg(long, global = true, value_name = "PATH", env = "URL_CHECKER_DATA_FILE")]
    pub data_file: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a single URL and record the result
    #[command(alias = "c")]
    Check(CheckCommand),

    /// View or export recorded results
    #[command(alias = "r")]
    Results(ResultsCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Resolved runtime state shared by every command.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Store backing every command.
    pub store: ResultStore,
    /// Suppress informational output.
    pub quiet: bool,
    /// Draw a spinner while a request is in flight.
    pub show_progress: bool,
}

impl AppContext {
    /// Build the context from parsed arguments and loaded settings.
    pub fn new(cli: &Cli, settings: &AppSettings) -> Self {
        let data_file = resolve_data_file(cli.data_file.as_deref(), settings);
        let show_progress =
            settings.show_progress && !cli.quiet && console::Term::stderr().is_term();

        Self {
            store: ResultStore::new(data_file),
            quiet: cli.quiet,
            show_progress,
        }
    }
}

impl Cli {
    /// Dispatch to the selected command.
    pub async fn execute(&self, settings: &AppSettings) -> CliResult<()> {
        let ctx = AppContext::new(self, settings);
        tracing::debug!(path = %ctx.store.path().display(), "using results file");

        if let Err(e) = ctx.store.ensure_initialized() {
            tracing::error!(error = %e, "error initializing results file");
        }

        match &self.command {
            None => run_menu(&ctx).await,
            Some(Commands::Check(cmd)) => cmd.execute(&ctx).await,
            Some(Commands::Results(cmd)) => cmd.execute(&ctx),
        }
    }
}

/// Run the interactive menu on standard input and output.
async fn run_menu(ctx: &AppContext) -> CliResult<()> {
    let checker = HttpsChecker::new()?;
    let input = BufReader::new(tokio::io::stdin());
    let output = tokio::io::stdout();

    let mut menu =
        Menu::new(checker, ctx.store.clone(), input, output).with_progress(ctx.show_progress);
    menu.run().await?;

    Ok(())
}
