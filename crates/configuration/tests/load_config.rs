use configuration::{ConfigError, load_config_from};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn absent_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = load_config_from(&temp.path().join("config.toml")).unwrap();

    assert_eq!(config.input.path, PathBuf::from("data.csv"));
    assert_eq!(config.output.path, PathBuf::from("result.json"));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn partial_file_overrides_only_what_it_names() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[output]
path = "reports/latest.json"

[logging]
level = "debug"
directory = "logs"
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.input.path, PathBuf::from("data.csv"));
    assert_eq!(config.output.path, PathBuf::from("reports/latest.json"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
}

#[test]
fn invalid_log_level_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)), "got {err:?}");
}

#[test]
fn malformed_toml_is_a_load_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[input\npath = ").unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::LoadError(_)), "got {err:?}");
}
