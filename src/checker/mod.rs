//! Checker module - validates input, probes the URL, records the outcome.
//!
//! The single suspension point of the program lives here: awaiting the
//! response of one outbound request.

pub mod https;
pub mod traits;

use crate::storage::{CheckRecord, ResultStore};
use crate::types::{TargetError, UrlTarget};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub use https::HttpsChecker;
pub use traits::Checker;

/// Run one complete check of operator input.
///
/// Invalid input is rejected before any request is made and nothing is
/// stored. A failed save is logged and the record is still returned, so
/// the caller reports the outcome as if it had been persisted.
pub async fn run_check<C>(
    checker: &C,
    store: &ResultStore,
    input: &str,
    show_progress: bool,
) -> Result<CheckRecord, TargetError>
where
    C: Checker + ?Sized,
{
    let target = UrlTarget::parse(input)?;

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("requesting {}", target.request_url()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let status = checker.check(&target).await;
    spinner.finish_and_clear();

    let record = CheckRecord::new(target.original(), status);
    if let Err(e) = store.append(record.clone()) {
        tracing::error!(error = %e, "error saving results");
    }

    Ok(record)
}
