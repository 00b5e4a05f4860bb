// Sequence and pattern mining over ordered event streams.
//
// Two related detectors live here. The miner counts every contiguous
// subsequence of event descriptions (all lengths at once, in one shared
// table) and ranks the most frequent. The pattern detector restricts the
// stream to one category first, then slides a fixed-length window over the
// survivors and keeps windows seen more than once.
//
// Key insight: recurring trouble shows up as SEQUENCES of events, not just
// raised counts of individual events. A disk that fills after every CPU
// overheat is invisible in a per-category histogram.

mod miner;
mod pattern;

pub use miner::{mine_sequences, top_sequences, SequenceKey, SequenceTable};
pub use pattern::{detect_patterns, PatternConfig, PatternKey, PatternMap};
