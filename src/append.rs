//! Validated construction and appending of new events
//!
//! Interactive prompting lives outside this crate; the CLI hands in a
//! complete candidate event and it is either valid or rejected here,
//! before anything touches the file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{LogError, Result};
use crate::event::EventRecord;

fn timestamp_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("timestamp regex is valid")
    })
}

/// A new event that has passed validation and is safe to append
#[derive(Debug, Clone)]
pub struct NewEvent {
    record: EventRecord,
}

impl NewEvent {
    /// Validate a candidate event
    ///
    /// The timestamp must match `YYYY-MM-DD HH:MM:SS`; category and id must
    /// be non-empty; no field except the description may contain a pipe,
    /// and the description may not either since appended lines must parse
    /// back to the same four fields.
    pub fn new(timestamp: &str, category: &str, id: &str, description: &str) -> Result<Self> {
        if !timestamp_pattern().is_match(timestamp.trim()) {
            return Err(LogError::InvalidArgument(format!(
                "timestamp {:?} does not match YYYY-MM-DD HH:MM:SS",
                timestamp
            )));
        }
        for (name, value) in [
            ("category", category),
            ("id", id),
            ("description", description),
        ] {
            if value.trim().is_empty() {
                return Err(LogError::InvalidArgument(format!("{name} must not be empty")));
            }
            if value.contains('|') {
                return Err(LogError::InvalidArgument(format!(
                    "{name} must not contain the field delimiter '|'"
                )));
            }
        }

        Ok(Self {
            record: EventRecord {
                timestamp: timestamp.trim().to_string(),
                category: category.trim().to_string(),
                id: id.trim().to_string(),
                description: description.trim().to_string(),
            },
        })
    }

    /// Parse a `TS,CATEGORY,ID,DESCRIPTION` spec as passed on the CLI
    pub fn from_spec(spec: &str) -> Result<Self> {
        let fields: Vec<&str> = spec.splitn(4, ',').collect();
        if fields.len() < 4 {
            return Err(LogError::InvalidArgument(format!(
                "expected TS,CATEGORY,ID,DESCRIPTION, got {:?}",
                spec
            )));
        }
        Self::new(fields[0], fields[1], fields[2], fields[3])
    }

    pub fn record(&self) -> &EventRecord {
        &self.record
    }
}

/// Append one validated event to the log file, creating it if absent
pub fn append_event(path: &Path, event: &NewEvent) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", event.record.to_line())?;
    tracing::debug!(path = %path.display(), "event appended");
    Ok(())
}
