//! JSON output format for mining results
//!
//! `--format json` mirrors the text reports with machine-readable structs.

use serde::{Deserialize, Serialize};

use crate::event::EventRecord;
use crate::sequence::{PatternKey, SequenceKey};

/// A ranked description sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSequence {
    /// Ordered event descriptions forming the sequence
    pub descriptions: Vec<String>,
    /// Occurrence count across the whole log
    pub count: usize,
}

/// Top-K result of the sequence miner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSequenceReport {
    pub top: usize,
    pub sequences: Vec<JsonSequence>,
}

/// A significant fixed-length pattern within one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPattern {
    pub category: String,
    /// Ordered descriptions of the window
    pub descriptions: Vec<String>,
    /// Occurrence count over the filtered sub-stream
    pub count: usize,
}

/// Result of the category pattern detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonPatternReport {
    pub category: String,
    pub pattern_length: usize,
    pub patterns: Vec<JsonPattern>,
}

/// Per-category event counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSummary {
    pub categories: Vec<JsonCategoryCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCategoryCount {
    pub category: String,
    pub count: usize,
}

impl JsonSequenceReport {
    pub fn from_ranked(ranked: &[(SequenceKey, usize)], top: usize) -> Self {
        Self {
            top,
            sequences: ranked
                .iter()
                .map(|(key, count)| JsonSequence {
                    descriptions: key.clone(),
                    count: *count,
                })
                .collect(),
        }
    }
}

impl JsonPatternReport {
    pub fn from_ranked(ranked: &[(PatternKey, usize)], category: &str, pattern_length: usize) -> Self {
        Self {
            category: category.to_string(),
            pattern_length,
            patterns: ranked
                .iter()
                .map(|(key, count)| JsonPattern {
                    category: category.to_string(),
                    descriptions: key.iter().map(|(_, desc)| desc.clone()).collect(),
                    count: *count,
                })
                .collect(),
        }
    }
}

impl JsonSummary {
    pub fn from_counts(counts: &[(String, usize)]) -> Self {
        Self {
            categories: counts
                .iter()
                .map(|(category, count)| JsonCategoryCount {
                    category: category.clone(),
                    count: *count,
                })
                .collect(),
        }
    }
}

/// Events matching a keyword search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSearchReport {
    pub keyword: String,
    pub matches: Vec<EventRecord>,
}
