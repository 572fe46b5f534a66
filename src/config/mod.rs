//! Configuration management for url-checker.
//!
//! Provides XDG-compliant settings storage and the rules for locating the
//! results file.

mod settings;

pub use settings::{default_data_file, resolve_data_file, AppSettings, Paths};
