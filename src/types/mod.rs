//! Core type definitions.
//!
//! Validated inputs and the two-valued check outcome, kept separate so that
//! an unvalidated string can never reach the checker by accident.

mod status;
mod target;

pub use status::AccessStatus;
pub use target::{is_valid_url, normalize_url, TargetError, UrlTarget, DEFAULT_SCHEME};
