//! Command-line interface for the `rewind` binary.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel, in your terminal
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a browsable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the move list newest first
    #[arg(long)]
    pub descending: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rewind"]);
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
        assert!(cli.log_file.is_none());
        assert!(!cli.descending);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["rewind", "-c", "my.toml", "--log-file", "x.log", "--descending"]);
        assert_eq!(cli.config, PathBuf::from("my.toml"));
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
        assert!(cli.descending);
    }
}
