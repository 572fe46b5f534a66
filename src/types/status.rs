//! Outcome of a single accessibility check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a URL answered with HTTP 200.
///
/// Only two outcomes exist. A non-200 response and a transport failure
/// (DNS, TLS, refused connection) are deliberately indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessStatus {
    /// The server answered with status 200.
    Accessible,
    /// Anything else.
    Blocked,
}

impl AccessStatus {
    /// Classify an HTTP status code. Only exactly 200 counts as accessible.
    pub fn from_status_code(code: u16) -> Self {
        if code == 200 {
            Self::Accessible
        } else {
            Self::Blocked
        }
    }

    /// Check if the URL was reachable.
    pub fn is_accessible(&self) -> bool {
        matches!(self, Self::Accessible)
    }

    /// The literal stored in the results file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accessible => "Accessible",
            Self::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accessible" => Ok(Self::Accessible),
            "blocked" => Ok(Self::Blocked),
            _ => Err(format!("unknown status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_accessible() {
        assert_eq!(AccessStatus::from_status_code(200), AccessStatus::Accessible);
        for code in [100, 201, 204, 301, 302, 304, 403, 404, 500, 503] {
            assert_eq!(AccessStatus::from_status_code(code), AccessStatus::Blocked);
        }
    }

    #[test]
    fn test_serializes_to_exact_literals() {
        assert_eq!(
            serde_json::to_string(&AccessStatus::Accessible).unwrap(),
            "\"Accessible\""
        );
        assert_eq!(
            serde_json::to_string(&AccessStatus::Blocked).unwrap(),
            "\"Blocked\""
        );
    }

    #[test]
    fn test_rejects_unknown_literal() {
        assert!(serde_json::from_str::<AccessStatus>("\"Unknown\"").is_err());
        assert!(serde_json::from_str::<AccessStatus>("\"blocked\"").is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("blocked".parse::<AccessStatus>().unwrap(), AccessStatus::Blocked);
        assert_eq!("Accessible".parse::<AccessStatus>().unwrap(), AccessStatus::Accessible);
        assert!("open".parse::<AccessStatus>().is_err());
    }
}
