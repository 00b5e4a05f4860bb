//! Text rendering of mining results
//!
//! Owns the string contracts; the mining core never formats anything.

use crate::event::EventRecord;
use crate::sequence::{PatternKey, PatternMap, SequenceKey};

/// Render the ranked sequence report
///
/// Heading plus one line per pair: `desc1, desc2[, ...]: count`.
pub fn render_top_sequences(ranked: &[(SequenceKey, usize)], k: usize) -> String {
    let mut out = format!("Top {k} most common sequences:\n");
    for (key, count) in ranked {
        out.push_str(&format!("{}: {}\n", key.join(", "), count));
    }
    out
}

/// Sort a pattern mapping for display: count descending, then key order
///
/// The detector's mapping is unranked by contract; display ranking happens
/// here so ties come out deterministically.
pub fn rank_patterns(patterns: &PatternMap) -> Vec<(PatternKey, usize)> {
    let mut ranked: Vec<_> = patterns
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Render the significant-pattern report
///
/// One line per pattern, 1-based:
/// `1. Pattern: Disk full -> CPU overheating | Occurrences: 2`
pub fn render_patterns(ranked: &[(PatternKey, usize)]) -> String {
    let mut out = String::new();
    for (index, (key, count)) in ranked.iter().enumerate() {
        let descriptions: Vec<&str> = key.iter().map(|(_, desc)| desc.as_str()).collect();
        out.push_str(&format!(
            "{}. Pattern: {} | Occurrences: {}\n",
            index + 1,
            descriptions.join(" -> "),
            count
        ));
    }
    if out.is_empty() {
        out.push_str("No repeating patterns found.\n");
    }
    out
}

/// Render the per-category event count summary
pub fn render_summary(counts: &[(String, usize)]) -> String {
    let mut out = String::from("Events per category:\n");
    for (category, count) in counts {
        out.push_str(&format!("{category}: {count}\n"));
    }
    out
}

/// Render matching events for a keyword search, one line per event
pub fn render_events(records: &[&EventRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_line());
        out.push('\n');
    }
    if out.is_empty() {
        out.push_str("No matching events.\n");
    }
    out
}
