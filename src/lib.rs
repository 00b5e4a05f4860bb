//! Recurra - sequence and pattern miner for pipe-delimited system event logs
//!
//! This library provides the core functionality for analyzing ordered event
//! streams: N-gram sequence mining across all window lengths, fixed-length
//! pattern detection within a single category, and the supporting log
//! reader, summaries, and report formatting.

pub mod append;
pub mod cli;
pub mod errors;
pub mod event;
pub mod json_output;
pub mod reader;
pub mod report;
pub mod sequence;
pub mod summary;
