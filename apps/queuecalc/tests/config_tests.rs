//! Integration tests for loading configuration files from disk.

#![allow(clippy::unwrap_used, clippy::panic)]

use queuecalc::AppConfig;
use queuecalc::AppError;
use queuecalc::presenter::TimeUnit;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_from_file_reads_all_sections() {
    let file = write_config(
        r#"
[server]
host = "0.0.0.0"
port = 9090
rate_limit = 0
cors_origins = "https://example.com"

[display]
digits = 3
units = "per_min"
"#,
    );

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.rate_limit, 0);
    assert_eq!(
        config.server.cors_origins.as_deref(),
        Some("https://example.com")
    );
    assert_eq!(config.display.digits, 3);
    assert_eq!(config.display.units, TimeUnit::PerMin);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("[display]\ndigits = 2\n");

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.display.digits, 2);
    assert_eq!(config.server, AppConfig::default().server);
    assert_eq!(config.display.units, TimeUnit::Unitless);
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_malformed_file_is_config_error() {
    let file = write_config("[server\nport = ");

    let err = AppConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = AppConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, AppError::Io(_)));
}

#[test]
fn test_oversized_file_rejected() {
    let padding = "# padding\n".repeat(8 * 1024);
    let file = write_config(&padding);

    let err = AppConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_load_validates_explicit_file() {
    let file = write_config("[display]\ndigits = 40\n");

    let err = AppConfig::load(Some(file.path())).unwrap_err();

    match err {
        AppError::Config(msg) => assert!(msg.contains("display.digits")),
        other => panic!("expected config error, got {other:?}"),
    }
}
