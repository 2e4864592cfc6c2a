//! Tests for configuration parsing and file loading

use keyforge_cli::Config;
use keyforge_common::ErrorKind;
use keyforge_key::GeneratorKind;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_defaults() {
    let config = Config::from_json(
        r#"{
            "defaults": {
                "password": { "length": 32, "includeSymbols": false },
                "api-key": { "prefix": "sk" }
            }
        }"#,
    )
    .unwrap();

    assert_eq!(config.len(), 2);
    let password = config.options_for(GeneratorKind::Password);
    assert_eq!(password.length, Some(32));
    assert_eq!(password.include_symbols, Some(false));
    assert_eq!(
        config.options_for(GeneratorKind::ApiKey).prefix.as_deref(),
        Some("sk")
    );
    assert!(config.options_for(GeneratorKind::Uuid).is_empty());
}

#[test]
fn test_empty_object_is_valid() {
    let config = Config::from_json("{}").unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_unknown_generator_is_rejected() {
    let error = Config::from_json(r#"{"defaults": {"sha1": {"length": 8}}}"#).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::Configuration);
    assert!(error.to_string().contains("sha1"));
}

#[test]
fn test_malformed_json_is_rejected() {
    let error = Config::from_json(r#"{"defaults": "#).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::Configuration);

    let error = Config::from_json(r#"{"theme": "dark"}"#).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::Configuration);
}

#[test]
fn test_load_from_explicit_path() {
    let file = write_config(r#"{"defaults": {"numeric": {"length": 6}}}"#);
    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.options_for(GeneratorKind::Numeric).length, Some(6));
}

#[test]
fn test_missing_explicit_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let error = Config::load(Some(missing.as_path())).unwrap_err();
    assert_eq!(error.kind(), &ErrorKind::Io);
}

#[test]
fn test_default_path_location() {
    if let Some(path) = Config::default_path() {
        assert!(path.ends_with("keyforge/config.json"));
    }
}
