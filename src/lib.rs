//! # url-checker - Interactive URL Reachability Checker
//!
//! url-checker asks an operator for a URL, sends it one GET request, and
//! appends the outcome to a local JSON file.
//!
//! ## Features
//!
//! - **Interactive Menu**: Check a URL, view recorded results, exit
//! - **Heuristic Validation**: A permissive hostname pattern gates every request
//! - **Two Outcomes**: `Accessible` for HTTP 200, `Blocked` for everything else
//! - **Result Log**: An append-only JSON array, rewritten whole on each save
//! - **Scriptable**: `check` and `results` subcommands with plain, JSON and CSV output
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use url_checker::checker::{run_check, HttpsChecker};
//! use url_checker::storage::ResultStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = ResultStore::new("url_checks.json");
//!     let checker = HttpsChecker::new().unwrap();
//!
//!     let record = run_check(&checker, &store, "example.com", false).await.unwrap();
//!     println!("{}", record.summary());
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Validated URL targets and the access status
//! - [`checker`] - The `Checker` trait and its HTTP implementation
//! - [`storage`] - The JSON result file
//! - [`config`] - Settings and file locations
//! - [`cli`] - Argument parsing, the interactive menu, and subcommands
//! - [`output`] - Output formatting utilities
//! - [`error`] - Error types

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use checker::{Checker, HttpsChecker};
pub use error::{CheckError, CliError, StorageError};
pub use storage::{CheckRecord, ResultStore};
pub use types::{AccessStatus, UrlTarget};
