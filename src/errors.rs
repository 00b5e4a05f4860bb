//! Error taxonomy for log reading and pattern configuration
//!
//! Malformed log lines are deliberately NOT represented here: the reader
//! skips them, matching the tolerance of the flat line format.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the reader, the detector configuration, and append
#[derive(Error, Debug)]
pub enum LogError {
    #[error("log file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read log: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, LogError>;
