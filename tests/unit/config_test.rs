//! Tests for configuration management

use std::fs;

use quotebook::CategoryMatching;
use quotebook::config::{Config, DEFAULT_ENDPOINT};
use quotebook::paths;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(config.filter.case_sensitive);
    assert!(config.sync.enabled);
    assert_eq!(config.sync.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.sync.limit, 5);
    assert_eq!(config.sync.category, "Server");
    assert_eq!(config.sync.interval_secs, 30);
    assert_eq!(config.matching(), CategoryMatching::Exact);
}

#[test]
fn test_missing_file_gives_defaults() {
    let home = TempDir::new().unwrap();
    assert_eq!(Config::load(home.path()), Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let home = TempDir::new().unwrap();
    fs::write(
        paths::config_file(home.path()),
        "[filter]\ncase_sensitive = false\n\n[sync]\ninterval_secs = 5\n",
    )
    .unwrap();

    let config = Config::load(home.path());
    assert_eq!(config.matching(), CategoryMatching::IgnoreCase);
    assert_eq!(config.sync.interval_secs, 5);
    assert_eq!(config.sync.limit, 5);
    assert!(config.sync.enabled);
}

#[test]
fn test_invalid_file_gives_defaults() {
    let home = TempDir::new().unwrap();
    fs::write(paths::config_file(home.path()), "[sync\nnot toml").unwrap();
    assert_eq!(Config::load(home.path()), Config::default());
}

#[test]
fn test_save_then_load() {
    let home = TempDir::new().unwrap();
    let mut config = Config::default();
    config.sync.enabled = false;
    config.sync.endpoint = "http://localhost:8080/posts".to_string();
    config.save(home.path()).unwrap();

    assert_eq!(Config::load(home.path()), config);
}
