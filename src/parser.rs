//! CSV reader for batches of daily bus entries.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::record::BusEntry;

/// Reads [`BusEntry`] rows from CSV with a header row.
///
/// # Errors
///
/// Returns an error naming the offending line if any row fails to
/// deserialize, including malformed `HH:MM` or `YYYY-MM-DD` fields.
pub fn parse_entries(reader: impl Read) -> Result<Vec<BusEntry>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut entries = Vec::new();

    for result in rdr.deserialize() {
        let entry: BusEntry = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or_default();
            anyhow::Error::new(e).context(format!("invalid entry on line {line}"))
        })?;
        entries.push(entry);
    }

    debug!(count = entries.len(), "Entries parsed");
    Ok(entries)
}

/// Opens `path` and delegates to [`parse_entries`].
pub fn parse_entries_file(path: impl AsRef<Path>) -> Result<Vec<BusEntry>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_entries(file).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "bus_number,date,village,departure_time,arrival_time,total_students,travelling_students\n";

    #[test]
    fn test_parse_empty_body() {
        let entries = parse_entries(HEADER.as_bytes()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_rows_in_order() {
        let csv = format!(
            "{HEADER}1234,2024-09-02,Rampur,07:30,08:20,40,32\n\
             0042, 2024-09-01 ,Sitapur,7:05,8:10,25,25\n"
        );

        let entries = parse_entries(csv.as_bytes()).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].bus_number, "1234");
        assert_eq!(entries[0].arrival_time.to_string(), "08:20");
        assert_eq!(entries[1].bus_number, "0042");
        assert_eq!(entries[1].date.to_string(), "2024-09-01");
        assert_eq!(entries[1].departure_time.to_string(), "07:05");
    }

    #[test]
    fn test_parse_rejects_bad_time() {
        let csv = format!("{HEADER}1234,2024-09-02,Rampur,07:30,late,40,32\n");
        let err = parse_entries(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        let csv = format!("{HEADER}1234,2024-09-02,Rampur,07:30,08:15,-1,0\n");
        assert!(parse_entries(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_entries_file("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("failed to open"));
    }
}
