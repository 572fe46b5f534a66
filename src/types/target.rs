//! URL target parsing.
//!
//! Operator input goes through a permissive, hostname-shaped pattern before
//! any request is made. The pattern is a heuristic gate and not a URL
//! grammar: it accepts anything that looks like `host.tld/path`, with or
//! without an `http://` / `https://` prefix.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Scheme prepended to inputs that carry none.
pub const DEFAULT_SCHEME: &str = "https://";

/// Hostname-like pattern accepted by [`is_valid_url`].
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)*/?$")
        .expect("URL pattern is a valid regex")
});

/// Matches an explicit http or https scheme, in any case.
static SCHEME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("scheme pattern is a valid regex"));

/// Check whether a candidate string looks like a URL.
///
/// Does not guarantee the URL resolves or is well-formed by RFC 3986.
pub fn is_valid_url(candidate: &str) -> bool {
    URL_PATTERN.is_match(candidate)
}

/// Prefix `https://` unless the input already names an http(s) scheme.
pub fn normalize_url(input: &str) -> String {
    if SCHEME_PATTERN.is_match(input) {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{input}")
    }
}

/// Error type for target parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
    #[error("invalid URL format: {0:?}")]
    InvalidFormat(String),
}

/// A validated URL, keeping both what the operator typed and what gets
/// requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTarget {
    original: String,
    request_url: String,
}

impl UrlTarget {
    /// Validate operator input and derive the request URL.
    pub fn parse(input: &str) -> Result<Self, TargetError> {
        if !is_valid_url(input) {
            return Err(TargetError::InvalidFormat(input.to_string()));
        }

        Ok(Self {
            original: input.to_string(),
            request_url: normalize_url(input),
        })
    }

    /// Build a target without validation.
    ///
    /// Useful for hosts the validator rejects by construction, such as
    /// `127.0.0.1:8080`.
    pub fn unchecked(input: impl Into<String>) -> Self {
        let original = input.into();
        let request_url = normalize_url(&original);
        Self {
            original,
            request_url,
        }
    }

    /// The input exactly as typed.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The URL the checker requests.
    pub fn request_url(&self) -> &str {
        &self.request_url
    }
}

impl fmt::Display for UrlTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
