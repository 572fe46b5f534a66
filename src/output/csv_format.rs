//! CSV output formatting.

use crate::storage::CheckRecord;
use std::io;

/// Render records as CSV with a 1-based index column.
pub fn render_csv(records: &[CheckRecord]) -> io::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record(["index", "url", "status"])?;

    // Write results
    for (index, record) in records.iter().enumerate() {
        wtr.write_record([
            (index + 1).to_string().as_str(),
            record.url.as_str(),
            record.status.as_str(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AccessStatus;

    #[test]
    fn test_csv_header_only_when_empty() {
        assert_eq!(render_csv(&[]).unwrap(), "index,url,status\n");
    }

    #[test]
    fn test_csv_quotes_urls_with_commas() {
        let records = vec![
            CheckRecord::new("example.com", AccessStatus::Accessible),
            CheckRecord::new("a,b.com", AccessStatus::Blocked),
        ];

        assert_eq!(
            render_csv(&records).unwrap(),
            "index,url,status\n1,example.com,Accessible\n2,\"a,b.com\",Blocked\n"
        );
    }
}
