//! Error types for url-checker.
//!
//! Uses `thiserror` for ergonomic error definitions.

use crate::types::TargetError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the HTTP checker.
///
/// These never reach the operator as a failure: a check that errors is
/// recorded as `Blocked` and the error is only logged.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Result type alias for checker operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors raised by the result store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read {}: {reason}", .path.display())]
    LoadFailed { path: PathBuf, reason: String },

    #[error("failed to write {}: {reason}", .path.display())]
    SaveFailed { path: PathBuf, reason: String },

    #[error("malformed results file {}: {reason}", .path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
