//! JSON output formatting.

use serde::Serialize;
use std::io;

/// Render any serializable value as pretty-printed JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
