//! Configuration management for the Turboshaft view model
//!
//! Font metrics used by the text measurer and the logging setup. Values come
//! from defaults, an optional TOML file and `TSV_*` environment overrides, in
//! that order.

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_CHAR_WIDTH, DEFAULT_LINE_HEIGHT, ENV_PREFIX};
use crate::core::error::{Error, Result};
use crate::measure::MonospaceMeasure;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text measurement settings
    pub measure: MeasureConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Font metrics for label measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureConfig {
    /// Advance width of one display column (pixels)
    pub char_width: f64,

    /// Height of one text line (pixels)
    pub line_height: f64,

    /// Extra space added to both measured dimensions (pixels)
    pub padding: f64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, compact)
    pub format: String,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            char_width: DEFAULT_CHAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
            padding: 0.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl MeasureConfig {
    /// Build the monospace measurer described by these metrics
    pub fn measurer(&self) -> MonospaceMeasure {
        MonospaceMeasure::new(self.char_width, self.line_height).with_padding(self.padding)
    }
}

impl Config {
    /// Load configuration from the default config file and environment
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE_NAME).exists() {
            Self::from_file(CONFIG_FILE_NAME)?
        } else {
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TSV_*` overrides read through `lookup`
    ///
    /// `lookup` receives the full variable name, e.g. `TSV_CHAR_WIDTH`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(width) = var("CHAR_WIDTH") {
            self.measure.char_width = width
                .parse()
                .map_err(|e| Error::config(format!("Invalid char width: {}", e)))?;
        }

        if let Some(height) = var("LINE_HEIGHT") {
            self.measure.line_height = height
                .parse()
                .map_err(|e| Error::config(format!("Invalid line height: {}", e)))?;
        }

        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = var("LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let m = &self.measure;
        if !(m.char_width.is_finite() && m.char_width > 0.0) {
            return Err(Error::config("Char width must be a positive number"));
        }
        if !(m.line_height.is_finite() && m.line_height > 0.0) {
            return Err(Error::config("Line height must be a positive number"));
        }
        if !(m.padding.is_finite() && m.padding >= 0.0) {
            return Err(Error::config("Padding must not be negative"));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(Error::config("Invalid log level")),
        }

        match self.logging.format.as_str() {
            "pretty" | "compact" => {}
            _ => return Err(Error::config("Invalid log format")),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.measure.char_width, DEFAULT_CHAR_WIDTH);
        assert_eq!(config.measure.line_height, DEFAULT_LINE_HEIGHT);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[measure]\nchar_width = 8.5\n").unwrap();
        assert_eq!(config.measure.char_width, 8.5);
        assert_eq!(config.measure.line_height, DEFAULT_LINE_HEIGHT);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_toml_str("[measure]\nchar_width = 0.0\n").is_err());
        assert!(Config::from_toml_str("[measure]\nline_height = -2.0\n").is_err());
        assert!(Config::from_toml_str("[measure]\npadding = -1.0\n").is_err());
        assert!(Config::from_toml_str("[logging]\nlevel = \"loud\"\n").is_err());
        assert!(Config::from_toml_str("[logging]\nformat = \"xml\"\n").is_err());
        assert!(Config::from_toml_str("[measure\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[measure]\nline_height = 20.0\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.measure.line_height, 20.0);
        assert_eq!(config.logging.level, "debug");

        let err = Config::from_file("/nonexistent/turboshaft-view.toml").unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TSV_CHAR_WIDTH", "9"),
            ("TSV_LINE_HEIGHT", "18.5"),
            ("TSV_LOG_LEVEL", "trace"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.measure.char_width, 9.0);
        assert_eq!(config.measure.line_height, 18.5);
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_bad_override_is_config_error() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == "TSV_CHAR_WIDTH").then(|| "wide".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_measurer_from_config() {
        use crate::measure::TextMeasure;

        let config = MeasureConfig {
            char_width: 10.0,
            line_height: 12.0,
            padding: 2.0,
        };
        let bbox = config.measurer().measure("abc");
        assert_eq!(bbox.width, 32.0);
        assert_eq!(bbox.height, 14.0);
    }
}
