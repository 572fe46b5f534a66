use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use url_checker::cli::Cli;
use url_checker::config::AppSettings;
use url_checker::output;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => AppSettings::load().context("failed to load settings")?,
    };

    init_tracing(cli.verbose || settings.verbose, cli.quiet);

    cli.execute(&settings).await?;
    Ok(())
}

/// Log to stderr so diagnostics never interleave with the menu on stdout.
/// `RUST_LOG` takes precedence over the flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("url_checker={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
