use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Log levels accepted in `[logging] level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// The root configuration structure for the analyzer.
///
/// Every section falls back to its defaults, so an absent or partial
/// `config.toml` still yields a complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// Where the sales ledger is read from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Path to the sales CSV, relative to the run directory.
    pub path: PathBuf,
}

/// Where the analysis result is written.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Path of the JSON report, relative to the run directory.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter level. `RUST_LOG`, when set, takes precedence.
    pub level: String,
    /// When set, logs go to `<directory>/sales-insight.log` instead of stderr.
    pub directory: Option<PathBuf>,
}

// --- Default Implementations ---

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data.csv"),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("result.json"),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Rejects values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "input.path must not be empty".to_string(),
            ));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "output.path must not be empty".to_string(),
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_run_directory() {
        let config = Config::default();
        assert_eq!(config.input.path, PathBuf::from("data.csv"));
        assert_eq!(config.output.path, PathBuf::from("result.json"));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_paths_fail_validation() {
        let mut config = Config::default();
        config.output.path = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(msg)) if msg.contains("output.path")
        ));
    }

    #[test]
    fn log_level_is_case_insensitive_but_checked() {
        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "chatty".to_string();
        assert!(config.validate().is_err());
    }
}
