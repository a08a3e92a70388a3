//! Driver configuration
//!
//! Loaded from the JSON file named by `SCOREBOARD_CONFIG_PATH`. An unset or
//! blank variable means defaults.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

pub const CONFIG_PATH_ENV: &str = "SCOREBOARD_CONFIG_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Failed to parse config JSON: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Reads the file named by [`CONFIG_PATH_ENV`], or returns defaults.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::load(Path::new(path)).with_context(|| format!("{CONFIG_PATH_ENV}='{path}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = CliConfig::from_json(r#"{"format": "json"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level": "debug", "format": "text"}}"#).unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_rejects_bad_files() {
        let missing = CliConfig::load(Path::new("/nonexistent/scoreboard.json")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read config file"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"format": "xml"}}"#).unwrap();
        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config JSON"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level": "  "}}"#).unwrap();
        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
