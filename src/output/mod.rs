//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of check
//! results, plus the styled console message helpers.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::render_csv;
pub use json_format::render_json;
pub use plain::{
    print_error, print_info, print_success, print_warning, render_check, render_results,
};

use crate::cli::OutputFormat;
use crate::storage::CheckRecord;
use std::io;

/// Render a list of records in the requested format.
pub fn format_results(records: &[CheckRecord], format: OutputFormat) -> io::Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain::render_results(records)),
        OutputFormat::Json => json_format::render_json(records),
        OutputFormat::Csv => csv_format::render_csv(records),
    }
}

/// Render a single freshly recorded check in the requested format.
pub fn format_check(record: &CheckRecord, format: OutputFormat) -> io::Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain::render_check(record)),
        OutputFormat::Json => json_format::render_json(record),
        OutputFormat::Csv => csv_format::render_csv(std::slice::from_ref(record)),
    }
}
