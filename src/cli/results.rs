//! Results subcommand implementation.
//!
//! Handles `url-checker results`: lists or exports recorded checks. Never
//! writes to the results file.

use crate::cli::{AppContext, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::storage::CheckRecord;
use crate::types::AccessStatus;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// View or export recorded check results.
#[derive(Parser, Debug)]
pub struct ResultsCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'o', long = "output")]
    pub output_file: Option<PathBuf>,

    /// Only include results with this status (accessible, blocked)
    #[arg(long)]
    pub status: Option<AccessStatus>,
}

impl ResultsCommand {
    /// Execute the results command.
    pub fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let records = filter_records(ctx.store.load_or_empty(), self.status);
        if let Some(status) = self.status.filter(|_| records.is_empty() && !ctx.quiet) {
            output::print_warning(&format!("no results with status {}", status));
        }

        let content = output::format_results(&records, self.format)?;

        if let Some(ref path) = self.output_file {
            fs::write(path, &content)
                .map_err(|e| CliError::Other(format!("failed to write file: {}", e)))?;

            if !ctx.quiet {
                output::print_success(&format!(
                    "Exported {} result(s) to {}",
                    records.len(),
                    path.display()
                ));
            }
        } else {
            print!("{}", content);
            if self.format == OutputFormat::Json {
                println!();
            }
        }

        Ok(())
    }
}

/// Keep only records with the given status, preserving order.
fn filter_records(mut records: Vec<CheckRecord>, status: Option<AccessStatus>) -> Vec<CheckRecord> {
    if let Some(status) = status {
        records.retain(|r| r.status == status);
    }
    records
}
