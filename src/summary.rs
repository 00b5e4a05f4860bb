//! Aggregate views over a parsed log: category counts, timestamps, search

use std::collections::HashMap;

use crate::event::EventRecord;

/// Count events per category, in first-seen category order
///
/// First-seen ordering keeps the summary stable across runs; a HashMap
/// alone would shuffle the rows.
pub fn count_by_category(records: &[EventRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in records {
        if !counts.contains_key(record.category.as_str()) {
            order.push(&record.category);
        }
        *counts.entry(&record.category).or_insert(0) += 1;
    }

    order
        .into_iter()
        .map(|cat| (cat.to_string(), counts[cat]))
        .collect()
}

/// All timestamps in file order
pub fn timestamps(records: &[EventRecord]) -> Vec<&str> {
    records.iter().map(|r| r.timestamp.as_str()).collect()
}

/// Case-insensitive substring search over event descriptions
pub fn search<'a>(records: &'a [EventRecord], keyword: &str) -> Vec<&'a EventRecord> {
    let needle = keyword.to_lowercase();
    records
        .iter()
        .filter(|r| r.description.to_lowercase().contains(&needle))
        .collect()
}
