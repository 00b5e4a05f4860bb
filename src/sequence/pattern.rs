use std::collections::HashMap;

use crate::errors::{LogError, Result};
use crate::event::EventRecord;

/// Type alias for a fixed-length pattern key: (category, description) pairs
pub type PatternKey = Vec<(String, String)>;

/// Type alias for the detector's output mapping
///
/// Unranked by design; callers that need ranking sort by count explicitly.
pub type PatternMap = HashMap<PatternKey, usize>;

/// Configuration for the category pattern detector
#[derive(Debug, Clone)]
pub struct PatternConfig {
    /// Category the filtered sub-stream is restricted to
    pub category: String,
    /// Exact window length; must be positive
    pub pattern_length: usize,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            category: "Warning".to_string(),
            pattern_length: 3,
        }
    }
}

/// Detect repeating fixed-length windows within one event category
///
/// The stream is first filtered to the target category, preserving relative
/// order. Two matching events that are non-adjacent in the raw log become
/// adjacent after filtering and ARE treated as adjacent for pattern
/// purposes; that filter-then-slide behavior is the contract, not a bug.
/// A window of exactly `pattern_length` entries then slides over the
/// filtered sub-stream, and only window keys occurring more than once are
/// returned.
///
/// # Arguments
/// * `records` - Events in log order
/// * `config` - Target category and window length
///
/// # Returns
/// Mapping from window key to occurrence count, filtered to count > 1
///
/// # Errors
/// `LogError::InvalidArgument` when `pattern_length` is zero; a window of
/// length zero is ill-defined rather than merely unproductive.
///
/// # Example
/// ```
/// use recurra::event::EventRecord;
/// use recurra::sequence::{detect_patterns, PatternConfig};
///
/// let records: Vec<_> = ["CPU overheating", "Disk full", "CPU overheating", "Disk full"]
///     .iter()
///     .enumerate()
///     .map(|(i, desc)| EventRecord {
///         timestamp: format!("2024-01-01 0{i}:00:00"),
///         category: "Warning".to_string(),
///         id: format!("ID{i}"),
///         description: desc.to_string(),
///     })
///     .collect();
///
/// let config = PatternConfig { category: "Warning".to_string(), pattern_length: 2 };
/// let patterns = detect_patterns(&records, &config).unwrap();
/// assert_eq!(patterns.len(), 1);
/// ```
pub fn detect_patterns(records: &[EventRecord], config: &PatternConfig) -> Result<PatternMap> {
    if config.pattern_length == 0 {
        return Err(LogError::InvalidArgument(
            "pattern length must be positive".to_string(),
        ));
    }

    // Filter-then-slide: drop non-matching records, keep relative order.
    let filtered: Vec<&EventRecord> = records
        .iter()
        .filter(|r| r.category == config.category)
        .collect();

    let mut counts: PatternMap = HashMap::new();
    for window in filtered.windows(config.pattern_length) {
        let key: PatternKey = window
            .iter()
            .map(|r| (r.category.clone(), r.description.clone()))
            .collect();
        *counts.entry(key).or_insert(0) += 1;
    }

    // Significance threshold: a pattern seen once is just a window.
    counts.retain(|_, count| *count > 1);

    tracing::debug!(
        category = %config.category,
        filtered = filtered.len(),
        significant = counts.len(),
        "pattern detection complete"
    );
    Ok(counts)
}
