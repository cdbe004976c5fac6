//! Tests for loading the TOML config from disk.

use rewind_tui::TuiConfig;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_file_values_are_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();
    writeln!(file, "show_help = false").unwrap();

    let config = TuiConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert!(!*config.show_help());
    assert!(!*config.start_descending());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "show_help = \"sometimes\"").unwrap();

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
