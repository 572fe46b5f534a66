//! Interactive menu controller.
//!
//! A two-state loop over line-oriented input. `Menu` waits for a choice;
//! `AwaitingUrl` waits for the URL to check. Every path leads back to
//! `Menu` except choosing "3" or reaching end of input.

use crate::checker::{run_check, Checker};
use crate::output;
use crate::storage::ResultStore;
use crate::types::is_valid_url;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const MENU_TEXT: &str = "\n--- URL Checker CLI Application ---\n\
                         1. Check a URL\n\
                         2. View URL Results\n\
                         3. Exit\n";
const CHOICE_PROMPT: &str = "Choose an option: ";
const URL_PROMPT: &str = "Enter a URL to check: ";

/// What the controller is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Waiting for a menu choice.
    Menu,
    /// Waiting for the URL to check.
    AwaitingUrl,
}

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckUrl,
    ViewResults,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Parse a menu selection. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::CheckUrl,
            "2" => Self::ViewResults,
            "3" => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Interactive menu over an async line reader and writer.
pub struct Menu<C, R, W> {
    checker: C,
    store: ResultStore,
    input: R,
    output: W,
    show_progress: bool,
}

impl<C, R, W> Menu<C, R, W>
where
    C: Checker,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a new menu controller.
    pub fn new(checker: C, store: ResultStore, input: R, output: W) -> Self {
        Self {
            checker,
            store,
            input,
            output,
            show_progress: false,
        }
    }

    /// Draw a spinner on stderr while a request is in flight.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Consume the controller and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the operator exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        let mut state = MenuState::Menu;

        loop {
            let next = match state {
                MenuState::Menu => {
                    self.write(MENU_TEXT).await?;
                    self.write(CHOICE_PROMPT).await?;
                    match self.read_line().await? {
                        Some(line) => self.handle_choice(MenuChoice::parse(&line)).await?,
                        None => None,
                    }
                }
                MenuState::AwaitingUrl => match self.read_line().await? {
                    Some(line) => {
                        self.process_url(&line).await?;
                        Some(MenuState::Menu)
                    }
                    None => None,
                },
            };

            match next {
                Some(next) => state = next,
                None => break,
            }
        }

        tracing::debug!("menu loop finished");
        self.output.flush().await
    }

    /// Act on a choice and return the next state, or `None` to stop.
    async fn handle_choice(&mut self, choice: MenuChoice) -> io::Result<Option<MenuState>> {
        match choice {
            MenuChoice::CheckUrl => {
                self.write(URL_PROMPT).await?;
                Ok(Some(MenuState::AwaitingUrl))
            }
            MenuChoice::ViewResults => {
                self.view_results().await?;
                Ok(Some(MenuState::Menu))
            }
            MenuChoice::Exit => {
                self.write("Goodbye!\n").await?;
                Ok(None)
            }
            MenuChoice::Invalid => {
                self.write("Invalid option. Please try again.\n").await?;
                Ok(Some(MenuState::Menu))
            }
        }
    }

    async fn process_url(&mut self, url: &str) -> io::Result<()> {
        if !is_valid_url(url) {
            return self.write("Invalid URL format.\n").await;
        }

        self.write("Checking URL...\n").await?;
        match run_check(&self.checker, &self.store, url, self.show_progress).await {
            Ok(record) => self.write(&output::render_check(&record)).await,
            Err(e) => {
                tracing::debug!(error = %e, "rejected input");
                self.write("Invalid URL format.\n").await
            }
        }
    }

    async fn view_results(&mut self) -> io::Result<()> {
        let records = self.store.load_or_empty();
        self.write(&output::render_results(&records)).await
    }

    /// Read one line without its terminator; `None` at end of input.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}
