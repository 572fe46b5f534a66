//! Checker trait abstraction.
//!
//! Defines a common interface for anything that can decide whether a URL is
//! reachable, so the menu can be driven without a network in tests.

use crate::types::{AccessStatus, UrlTarget};
use async_trait::async_trait;

/// Trait for accessibility checker implementations.
///
/// A check never fails: every error is folded into
/// [`AccessStatus::Blocked`].
///
/// # Example
///
/// ```ignore
/// use url_checker::checker::{Checker, HttpsChecker};
/// use url_checker::types::UrlTarget;
///
/// async fn probe<C: Checker>(checker: &C) {
///     let target = UrlTarget::parse("example.com").unwrap();
///     println!("{}", checker.check(&target).await);
/// }
/// ```
#[async_trait]
pub trait Checker: Send + Sync {
    /// Issue one request for the target and classify the outcome.
    async fn check(&self, target: &UrlTarget) -> AccessStatus;
}
