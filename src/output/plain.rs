//! Plain text output formatting.
//!
//! Produces the human-readable text shown by the interactive menu.

use crate::storage::CheckRecord;
use crate::types::AccessStatus;
use console::{style, Style};
use std::fmt::Write;

/// Render the stored results listing, numbered from 1.
pub fn render_results(records: &[CheckRecord]) -> String {
    let mut out = String::new();

    if records.is_empty() {
        out.push_str("\nNo URL checks have been performed yet.\n");
        return out;
    }

    let _ = writeln!(out, "\n{}", style("--- URL Check Results ---").cyan().bold());
    for (index, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. URL: {} | Status: {}",
            index + 1,
            record.url,
            status_style(record.status).apply_to(record.status)
        );
    }

    out
}

/// Render the outcome of a single check.
pub fn render_check(record: &CheckRecord) -> String {
    format!(
        "URL: {}\nStatus: {}\n",
        record.url,
        status_style(record.status).apply_to(record.status)
    )
}

fn status_style(status: AccessStatus) -> Style {
    match status {
        AccessStatus::Accessible => Style::new().green().bold(),
        AccessStatus::Blocked => Style::new().red(),
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
