//! Tool configuration: file, environment, then command line
//!
//! Values are layered. A TOML file (explicit `--config` path, else
//! `flightmr.toml` in the working directory) is read first, environment
//! variables are merged over it, and command-line flags win over both.

use crate::error::{ErrorCode, FlightError, Result};
use crate::questions::QuestionSettings;
use crate::report::FormatType;
use crate::source::SourceOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "flightmr.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Dataset used when a command gets no `--file`
    pub dataset: Option<PathBuf>,
    /// Field delimiter of the dataset
    pub delimiter: char,
    /// How many entries ranking questions report
    pub top_n: usize,
    /// Highest occupancy rate that still counts as almost empty
    pub empty_threshold: f64,
    pub format: FormatType,
    /// Log filter used when no `-v` flag is given
    pub log_level: Option<String>,
}

impl Default for FlightConfig {
    fn default() -> Self {
        let settings = QuestionSettings::default();
        Self {
            dataset: None,
            delimiter: ',',
            top_n: settings.top_n,
            empty_threshold: settings.empty_threshold,
            format: FormatType::Text,
            log_level: None,
        }
    }
}

impl FlightConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FlightError::config_with_code(
                ErrorCode::CONFIG_NOT_FOUND,
                format!("cannot read {}", path.display()),
            )
            .with_source(e)
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml(&content)
    }

    /// Find and load configuration, then merge environment overrides
    ///
    /// An explicit path must exist. Without one, `flightmr.toml` under
    /// `working_dir` is used when present, otherwise defaults.
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        Self::discover_with(explicit, working_dir, |name| std::env::var(name).ok())
    }

    /// Like [`discover`](Self::discover), reading overrides through `lookup`
    pub fn discover_with(
        explicit: Option<&Path>,
        working_dir: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let candidate = working_dir.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    Self::load(&candidate)?
                } else {
                    Self::default()
                }
            }
        };

        config.merge_vars(lookup);
        config.validate()?;
        Ok(config)
    }

    fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dataset) = lookup("FLIGHTMR_DATASET") {
            self.dataset = Some(PathBuf::from(dataset));
        }

        if let Some(log_level) = lookup("FLIGHTMR_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        if let Some(top_n) = lookup("FLIGHTMR_TOP_N") {
            match top_n.parse::<usize>() {
                Ok(value) => self.top_n = value,
                Err(_) => warn!("Ignoring FLIGHTMR_TOP_N={}: not a number", top_n),
            }
        }
    }

    /// Reject values no question can work with
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(FlightError::validation_with_code(
                ErrorCode::VALIDATION_OUT_OF_RANGE,
                "must be greater than 0",
                Some("top_n".to_string()),
            ));
        }

        if !(0.0..=1.0).contains(&self.empty_threshold) {
            return Err(FlightError::validation_with_code(
                ErrorCode::VALIDATION_OUT_OF_RANGE,
                format!("must be between 0 and 1, got {}", self.empty_threshold),
                Some("empty_threshold".to_string()),
            ));
        }

        if !self.delimiter.is_ascii() {
            return Err(FlightError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("delimiter '{}' must be a single ASCII character", self.delimiter),
            ));
        }

        Ok(())
    }

    pub fn source_options(&self) -> SourceOptions {
        SourceOptions {
            delimiter: self.delimiter as u8,
        }
    }

    pub fn question_settings(&self) -> QuestionSettings {
        QuestionSettings {
            empty_threshold: self.empty_threshold,
            top_n: self.top_n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = FlightConfig::default();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.format, FormatType::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FlightConfig::from_toml(
            r#"
dataset = "data/flights.csv"
top_n = 10
format = "json-pretty"
"#,
        )
        .unwrap();

        assert_eq!(config.dataset, Some(PathBuf::from("data/flights.csv")));
        assert_eq!(config.top_n, 10);
        assert_eq!(config.format, FormatType::JsonPretty);
        assert!((config.empty_threshold - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = FlightConfig::from_toml("top_n = \"many\"").unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FLIGHTMR_DATASET", "/tmp/other.csv"),
            ("FLIGHTMR_TOP_N", "3"),
            ("FLIGHTMR_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = FlightConfig::default();
        config.merge_vars(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.dataset, Some(PathBuf::from("/tmp/other.csv")));
        assert_eq!(config.top_n, 3);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_bad_env_number_is_ignored() {
        let mut config = FlightConfig::default();
        config.merge_vars(|name| (name == "FLIGHTMR_TOP_N").then(|| "lots".to_string()));
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = FlightConfig {
            empty_threshold: 1.5,
            ..FlightConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err().code(),
            ErrorCode::VALIDATION_OUT_OF_RANGE
        );

        let config = FlightConfig {
            top_n: 0,
            ..FlightConfig::default()
        };
        assert!(config.validate().is_err());

        let config = FlightConfig {
            delimiter: 'é',
            ..FlightConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err().code(),
            ErrorCode::CONFIG_INVALID_VALUE
        );
    }

    #[test]
    fn test_discover_finds_file_in_working_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "delimiter = \";\"\n").unwrap();

        let config = FlightConfig::discover_with(None, dir.path(), |_| None).unwrap();
        assert_eq!(config.source_options().delimiter, b';');
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_discover_merges_lookup_over_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "top_n = 7\n").unwrap();

        let config = FlightConfig::discover_with(None, dir.path(), |name| {
            (name == "FLIGHTMR_TOP_N").then(|| "2".to_string())
        })
        .unwrap();
        assert_eq!(config.top_n, 2);
    }

    #[test]
    fn test_discover_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err =
            FlightConfig::discover_with(Some(&dir.path().join("nope.toml")), dir.path(), |_| None)
                .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
    }
}
