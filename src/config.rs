//! TOML configuration for the solver binary.
//!
//! Every section is optional; a missing file or an empty document yields
//! [`AppConfig::default`]. Command-line flags override what is loaded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::report::OutputFormat;
use crate::solvers::day2::DEFAULT_MAX_STEP;

pub const DEFAULT_CONFIG_PATH: &str = "puzzle-solvers.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Default input file per day, used when `--file` is not given.
    #[serde(default)]
    pub inputs: InputsConfig,

    #[serde(default)]
    pub day2: Day2Config,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputsConfig {
    pub day1: Option<PathBuf>,
    pub day2: Option<PathBuf>,
    pub day3: Option<PathBuf>,
}

impl InputsConfig {
    /// Pick the input for `day`: an explicit path wins, then the configured
    /// default.
    pub fn resolve(&self, day: u8, explicit: Option<PathBuf>) -> Result<PathBuf, SolverError> {
        explicit
            .or_else(|| self.for_day(day).map(Path::to_path_buf))
            .ok_or(SolverError::MissingInput { day })
    }

    pub fn for_day(&self, day: u8) -> Option<&Path> {
        match day {
            1 => self.day1.as_deref(),
            2 => self.day2.as_deref(),
            3 => self.day3.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day2Config {
    /// Largest allowed difference between adjacent levels.
    #[serde(default = "default_max_step")]
    pub max_step: u64,
}

impl Default for Day2Config {
    fn default() -> Self {
        Self {
            max_step: default_max_step(),
        }
    }
}

fn default_max_step() -> u64 {
    DEFAULT_MAX_STEP
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                valid_levels, self.logging.level
            )));
        }
        if self.day2.max_step == 0 {
            return Err(ConfigError::Validation(
                "day2.max_step must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.day2.max_step, 3);
        assert_eq!(config.inputs.for_day(3), None);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [logging]
            level = "debug"

            [output]
            format = "json"

            [inputs]
            day1 = "inputs/day1.txt"
            day3 = "inputs/day3.txt"

            [day2]
            max_step = 4
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.inputs.for_day(1), Some(Path::new("inputs/day1.txt")));
        assert_eq!(config.inputs.for_day(2), None);
        assert_eq!(config.inputs.for_day(3), Some(Path::new("inputs/day3.txt")));
        assert_eq!(config.day2.max_step, 4);
    }

    #[test]
    fn test_explicit_input_wins_over_config() {
        let config = AppConfig::parse("[inputs]\nday2 = \"configured.txt\"").unwrap();
        let path = config
            .inputs
            .resolve(2, Some(PathBuf::from("flag.txt")))
            .unwrap();
        assert_eq!(path, PathBuf::from("flag.txt"));
    }

    #[test]
    fn test_configured_input_used_without_flag() {
        let config = AppConfig::parse("[inputs]\nday2 = \"configured.txt\"").unwrap();
        assert_eq!(
            config.inputs.resolve(2, None).unwrap(),
            PathBuf::from("configured.txt")
        );
    }

    #[test]
    fn test_no_input_anywhere_is_an_error() {
        let config = AppConfig::parse("[inputs]\nday1 = \"day1.txt\"").unwrap();
        let err = config.inputs.resolve(3, None).unwrap_err();
        assert!(matches!(err, SolverError::MissingInput { day: 3 }));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let err = AppConfig::parse("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_zero_max_step() {
        let err = AppConfig::parse("[day2]\nmax_step = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = AppConfig::parse("[logging").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("puzzle-solvers.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = AppConfig::parse("[day2]\nmax_step = 5").unwrap();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert_eq!(AppConfig::parse(&rendered).unwrap(), config);
    }
}
