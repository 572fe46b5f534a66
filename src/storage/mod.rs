//! Check result persistence.
//!
//! Provides a single JSON file holding every check ever recorded.

mod json_store;

pub use json_store::{CheckRecord, ResultStore, DATA_FILE_NAME};
