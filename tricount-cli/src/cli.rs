//! Command-line interface argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// tricount - report the most frequent three-word phrases in text
///
/// Reads one or more text files (or standard input when no files are
/// given), counts every three-word phrase, and prints the most frequent
/// ones.
///
/// Examples:
///   tricount book.txt
///   tricount -n 10 part1.txt part2.txt
///   cat book.txt | tricount
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text files to analyze; reads standard input when omitted
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Number of top phrases to report
    #[arg(short = 'n', long = "top", default_value = "5", value_name = "COUNT")]
    pub top: usize,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }
        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
