//! Configuration tests
//!
//! Round-trip guards: every field written by `to_toml` must parse back into
//! the same effective config.

use super::*;
use std::collections::HashMap;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env).unwrap();
    assert_eq!(resolved.bind_addr, config.bind_addr);
    assert_eq!(resolved.mode, Mode::Development);
    assert_eq!(resolved.registry_file, None);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Daily);
    assert!(resolved.audit.warn_on_startup);
}

#[test]
fn test_config_roundtrip_customized() {
    let mut config = Config::default();
    config.bind_addr = "0.0.0.0:8081".parse().unwrap();
    config.mode = Mode::Production;
    config.registry_file = Some(PathBuf::from("design/registry.toml"));
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;
    config.audit.warn_on_startup = false;

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let resolved = Config::resolve(file, no_env).unwrap();

    assert_eq!(resolved.bind_addr, config.bind_addr);
    assert_eq!(resolved.mode, Mode::Production);
    assert_eq!(
        resolved.registry_file,
        Some(PathBuf::from("design/registry.toml"))
    );
    assert_eq!(resolved.logging.level, "debug");
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
    assert!(!resolved.audit.warn_on_startup);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
bind_addr = "127.0.0.1:4000"
mode = "development"
registry_file = "file.toml"
"#,
    )
    .unwrap();

    let env = env_from(&[
        ("SHOWCASE_BIND", "127.0.0.1:5000"),
        ("SHOWCASE_ENV", "production"),
        ("SHOWCASE_REGISTRY", "env.toml"),
    ]);
    let config = Config::resolve(file, env).unwrap();

    assert_eq!(config.bind_addr.port(), 5000);
    assert_eq!(config.mode, Mode::Production);
    assert_eq!(config.registry_file, Some(PathBuf::from("env.toml")));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file: FileConfig = toml::from_str("").unwrap();
    let config = Config::resolve(file, no_env).unwrap();

    assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_prefix, "ds-showcase");
    assert_eq!(config.logging.file_dir, PathBuf::from("./logs"));
}

#[test]
fn test_invalid_bind_address_is_an_error() {
    let env = env_from(&[("SHOWCASE_BIND", "not-an-address")]);
    let err = Config::resolve(FileConfig::default(), env).unwrap_err();
    assert!(err.to_string().contains("not-an-address"));
}

#[test]
fn test_empty_registry_env_means_builtin() {
    let env = env_from(&[("SHOWCASE_REGISTRY", "")]);
    let config = Config::resolve(FileConfig::default(), env).unwrap();
    assert_eq!(config.registry_file, None);
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_mode_from_name() {
    assert_eq!(Mode::from_name("production"), Mode::Production);
    assert_eq!(Mode::from_name("PROD"), Mode::Production);
    assert_eq!(Mode::from_name("development"), Mode::Development);
    assert_eq!(Mode::from_name("staging"), Mode::Development);
    assert!(Mode::Development.is_development());
}

#[test]
fn test_log_rotation_from_name() {
    assert_eq!(LogRotation::from_name("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::from_name("NEVER"), LogRotation::Never);
    assert_eq!(LogRotation::from_name("weekly"), LogRotation::Daily);
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let parsed: Result<FileConfig, _> = toml::from_str("[audit]\nwarn_on_startup = \"yes\"\n");
    assert!(parsed.is_err());
}
