//! Event record type and line parsing
//!
//! Log lines are pipe-delimited:
//! `2024-01-01 01:00:00 | Warning | ID1 | CPU overheating`
//!
//! Lines with fewer than four fields are malformed and parse to `None`;
//! callers skip them rather than erroring, matching the tolerance of the
//! flat line format.

use serde::{Deserialize, Serialize};

/// A single parsed system event
///
/// Immutable once parsed; field order mirrors the line format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Timestamp string, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Event category (e.g., "Warning", "Error", "Info")
    pub category: String,
    /// Event identifier (e.g., "ID1")
    pub id: String,
    /// Free-text event description; this is what the sequence miner consumes
    pub description: String,
}

impl EventRecord {
    /// Parse one log line into an event record
    ///
    /// Splits on `|` into at most 4 fields and trims surrounding whitespace
    /// from each. The description is the 4th field onward, so descriptions
    /// may themselves contain pipes. Returns `None` for lines with fewer
    /// than 4 fields (malformed-line tolerance, not an error).
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.splitn(4, '|');
        let timestamp = fields.next()?.trim();
        let category = fields.next()?.trim();
        let id = fields.next()?.trim();
        let description = fields.next()?.trim();

        Some(Self {
            timestamp: timestamp.to_string(),
            category: category.to_string(),
            id: id.to_string(),
            description: description.to_string(),
        })
    }

    /// Render the record back into the line format
    pub fn to_line(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.timestamp, self.category, self.id, self.description
        )
    }
}
