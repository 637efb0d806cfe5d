//! Tests for loading the front-end configuration.

use std::io::Write;
use std::path::PathBuf;
use timetravel_tui::TuiConfig;

#[test]
fn test_defaults() {
    let config = TuiConfig::default();
    assert_eq!(config.log_file(), &PathBuf::from("timetravel_tictactoe.log"));
    assert_eq!(config.log_filter(), "info");
    assert!(*config.highlight_winning_line());
}

#[test]
fn test_from_file_fills_missing_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "highlight_winning_line = false").expect("write config");

    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert!(!*config.highlight_winning_line());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_from_file_reads_all_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "log_file = \"/tmp/game.log\"\nlog_filter = \"debug\"\nhighlight_winning_line = true"
    )
    .expect("write config");

    let config = TuiConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "highlight_winning_line = \"sometimes\"").expect("write config");

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = TuiConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
