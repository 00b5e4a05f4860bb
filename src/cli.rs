//! CLI argument parsing for Recurra

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "recurra")]
#[command(version)]
#[command(about = "Sequence and pattern miner for pipe-delimited system event logs", long_about = None)]
pub struct Cli {
    /// Path to the event log file
    pub log_file: PathBuf,

    /// Mine the most frequent description sequences (default action)
    #[arg(long)]
    pub sequences: bool,

    /// Detect repeating fixed-length patterns within one category
    #[arg(long)]
    pub patterns: bool,

    /// Window length for --patterns
    #[arg(long = "pattern-length", value_name = "N", default_value = "3")]
    pub pattern_length: usize,

    /// Target category for --patterns
    #[arg(long, value_name = "NAME", default_value = "Warning")]
    pub category: String,

    /// How many ranked sequences to print
    #[arg(long, value_name = "K", default_value = "3")]
    pub top: usize,

    /// Print event counts per category
    #[arg(long)]
    pub summary: bool,

    /// Print all timestamps in file order
    #[arg(long)]
    pub timestamps: bool,

    /// Print events whose description contains KEYWORD (case-insensitive)
    #[arg(long, value_name = "KEYWORD")]
    pub search: Option<String>,

    /// Validate and append one event line, given as TS,CATEGORY,ID,DESC
    #[arg(long, value_name = "SPEC")]
    pub add: Option<String>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug tracing to stderr
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_log_file() {
        let cli = Cli::parse_from(["recurra", "events.txt"]);
        assert_eq!(cli.log_file, PathBuf::from("events.txt"));
        assert!(!cli.patterns);
    }

    #[test]
    fn test_cli_pattern_length_default() {
        let cli = Cli::parse_from(["recurra", "events.txt", "--patterns"]);
        assert!(cli.patterns);
        assert_eq!(cli.pattern_length, 3);
        assert_eq!(cli.category, "Warning");
    }

    #[test]
    fn test_cli_pattern_length_custom() {
        let cli = Cli::parse_from([
            "recurra",
            "events.txt",
            "--patterns",
            "--pattern-length",
            "2",
        ]);
        assert_eq!(cli.pattern_length, 2);
    }

    #[test]
    fn test_cli_rejects_non_numeric_pattern_length() {
        let result = Cli::try_parse_from(["recurra", "events.txt", "--pattern-length", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_negative_pattern_length() {
        let result = Cli::try_parse_from(["recurra", "events.txt", "--pattern-length", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_top_default() {
        let cli = Cli::parse_from(["recurra", "events.txt"]);
        assert_eq!(cli.top, 3);
    }

    #[test]
    fn test_cli_search_keyword() {
        let cli = Cli::parse_from(["recurra", "events.txt", "--search", "disk"]);
        assert_eq!(cli.search.as_deref(), Some("disk"));
    }

    #[test]
    fn test_cli_requires_log_file() {
        let result = Cli::try_parse_from(["recurra"]);
        assert!(result.is_err());
    }
}
