//! Check subcommand implementation.
//!
//! Handles `url-checker check <URL>`: one non-interactive check, recorded
//! exactly as the menu would record it.

use crate::checker::{run_check, HttpsChecker};
use crate::cli::{AppContext, OutputFormat};
use crate::error::CliResult;
use crate::output;
use clap::Parser;

/// Check a single URL and record the result.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// URL to check
    ///
    /// A missing scheme defaults to https://.
    ///
    /// Examples:
    ///   example.com
    ///   https://example.com/docs
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format for the result
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

impl CheckCommand {
    /// Execute the check command.
    pub async fn execute(&self, ctx: &AppContext) -> CliResult<()> {
        let checker = HttpsChecker::new()?;
        let record = run_check(&checker, &ctx.store, &self.url, ctx.show_progress).await?;

        print!("{}", output::format_check(&record, self.format)?);
        if self.format == OutputFormat::Json {
            println!();
        }

        if !ctx.quiet && self.format == OutputFormat::Plain {
            output::print_info(&format!(
                "{} result(s) stored in {}",
                ctx.store.count(),
                ctx.store.path().display()
            ));
        }

        Ok(())
    }
}
