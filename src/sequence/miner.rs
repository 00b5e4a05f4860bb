use std::collections::HashMap;

/// Type alias for a mined sequence (ordered tuple of event descriptions)
pub type SequenceKey = Vec<String>;

/// Per-key bookkeeping inside the shared frequency table
#[derive(Debug, Clone, Copy)]
struct SequenceStat {
    count: usize,
    /// Insertion index into the table; breaks count ties deterministically
    /// (the sequence first seen in scan order wins).
    first_seen: usize,
}

/// Frequency table over contiguous subsequences of every length at once
///
/// Sequences of different lengths never conflate: the keys have different
/// arity and compare unequal. The table is local to one mining call and is
/// never persisted.
#[derive(Debug, Default)]
pub struct SequenceTable {
    stats: HashMap<SequenceKey, SequenceStat>,
}

impl SequenceTable {
    /// Number of distinct sequences counted
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Occurrence count for one sequence, if it was seen
    pub fn count(&self, key: &[String]) -> Option<usize> {
        self.stats.get(key).map(|s| s.count)
    }

    fn record(&mut self, key: SequenceKey) {
        let next_index = self.stats.len();
        self.stats
            .entry(key)
            .or_insert(SequenceStat {
                count: 0,
                first_seen: next_index,
            })
            .count += 1;
    }
}

/// Count every contiguous subsequence of the description stream
///
/// For a stream of N descriptions, window lengths run from 2 up to N-1
/// inclusive; the maximal length N is never counted, and for N < 3 the
/// length range is empty so the table comes back empty. This boundary is
/// part of the contract, not an error.
///
/// # Arguments
/// * `descriptions` - Event descriptions in log order
///
/// # Returns
/// Shared frequency table spanning all window lengths
///
/// # Example
/// ```
/// use recurra::sequence::mine_sequences;
///
/// let descs = vec!["A".to_string(), "B".to_string(), "A".to_string(), "B".to_string()];
/// let table = mine_sequences(&descs);
///
/// assert_eq!(table.count(&["A".to_string(), "B".to_string()]), Some(2));
/// assert_eq!(table.count(&["B".to_string(), "A".to_string()]), Some(1));
/// ```
pub fn mine_sequences(descriptions: &[String]) -> SequenceTable {
    let mut table = SequenceTable::default();
    let n = descriptions.len();

    // Length range [2, N-1]; empty when N < 3.
    for len in 2..n {
        for window in descriptions.windows(len) {
            table.record(window.to_vec());
        }
    }

    // O(N^2) windows overall; fine for the log sizes this tool targets.
    tracing::debug!(
        descriptions = n,
        distinct_sequences = table.len(),
        "sequence mining complete"
    );
    table
}

/// Rank the table and return the top `k` most frequent sequences
///
/// Sorted by count descending; ties break by first occurrence in scan
/// order (stable), so repeated runs over the same input give identical
/// rankings even though the underlying map is unordered.
pub fn top_sequences(table: &SequenceTable, k: usize) -> Vec<(SequenceKey, usize)> {
    let mut ranked: Vec<_> = table
        .stats
        .iter()
        .map(|(key, stat)| (key.clone(), *stat))
        .collect();

    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.1.first_seen.cmp(&b.1.first_seen)));

    ranked
        .into_iter()
        .take(k)
        .map(|(key, stat)| (key, stat.count))
        .collect()
}
