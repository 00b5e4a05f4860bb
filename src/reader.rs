//! Event log reader: file path in, ordered event records out
//!
//! The whole log is materialized before any mining begins; order is file
//! line order and is never reshuffled, since sequence adjacency is the
//! signal being mined.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::errors::{LogError, Result};
use crate::event::EventRecord;

/// Read and parse an event log file
///
/// Malformed lines (fewer than 4 pipe-separated fields) are skipped with a
/// debug trace, not reported as errors. A missing file maps to
/// `LogError::NotFound`; any other read failure maps to `LogError::Io`.
pub fn read_log(path: &Path) -> Result<Vec<EventRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LogError::NotFound(path.to_path_buf()),
        _ => LogError::Io(e),
    })?;

    let mut records = Vec::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match EventRecord::parse_line(&line) {
            Some(record) => records.push(record),
            None => {
                tracing::debug!(line = line_no + 1, "skipping malformed log line");
            }
        }
    }

    tracing::debug!(events = records.len(), "log loaded");
    Ok(records)
}

/// Convenience accessor: descriptions only, in log order
///
/// This is the exact input the sequence miner consumes.
pub fn descriptions(records: &[EventRecord]) -> Vec<String> {
    records.iter().map(|r| r.description.clone()).collect()
}
