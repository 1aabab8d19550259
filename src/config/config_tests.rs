//! Tests for config loading

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::tooltip::Placement;

#[test]
fn test_config_path_is_under_dot_config() {
    let path = config_path().unwrap();
    assert!(path.to_string_lossy().contains(".config/swatch"));
    assert!(path.to_string_lossy().ends_with("config.toml"));
}

#[test]
fn test_missing_file_gives_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from_path(&dir.path().join("config.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[tooltip]\ndelay_ms = 120\nplacement = \"bottom\"\n").unwrap();

    let result = load_config_from_path(&path);

    assert!(result.warning.is_none());
    assert_eq!(result.config.tooltip.delay_ms, 120);
    assert_eq!(result.config.tooltip.placement, Placement::Bottom);
}

#[test]
fn test_malformed_file_gives_defaults_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[tooltip\ndelay_ms = ").unwrap();

    let result = load_config_from_path(&path);

    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.contains("Invalid config"));
    assert!(warning.contains("Using defaults"));
}

#[test]
fn test_parse_config_wrong_type_is_error() {
    let result = parse_config("[tooltip]\ndelay_ms = \"soon\"\n");
    assert!(matches!(result, Err(SwatchError::ConfigParse(_))));
}
