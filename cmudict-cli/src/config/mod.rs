//! Configuration module
//!
//! A configuration file holds a `[validation]` table, read by
//! [`cmudict_core::ValidationSection`], and an `[output]` table. Values given
//! on the command line take precedence over the file.

use crate::error::CliError;
use anyhow::{Context, Result};
use cmudict_core::{ValidationConfig, ValidationSection};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Validation configuration
    #[serde(default)]
    pub validation: ValidationSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Default diagnostic format for `validate`
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Default sort mode for `convert`
    pub sort: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            sort: "none".to_string(),
        }
    }
}

/// Command-line values that override the `[validation]` table
#[derive(Debug, Default)]
pub struct ValidationOverrides<'a> {
    /// Warning tokens, applied after those from the file
    pub warnings: &'a [String],
    /// First expected context position
    pub order_from: Option<u32>,
    /// Input accent
    pub accent: Option<&'a str>,
    /// Input dialect
    pub dialect: Option<&'a str>,
}

impl CliConfig {
    /// Load the configuration file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Build the validation settings, letting command-line values win
    pub fn validation_config(&self, overrides: &ValidationOverrides<'_>) -> Result<ValidationConfig> {
        let mut section = self.validation.clone();
        section.warnings.extend(overrides.warnings.iter().cloned());
        if let Some(start) = overrides.order_from {
            section.order_from = Some(start);
        }
        if let Some(accent) = overrides.accent {
            section.accent = Some(accent.to_string());
        }
        if let Some(dialect) = overrides.dialect {
            section.dialect = Some(dialect.to_string());
        }

        section
            .into_config()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmudict_core::{Check, Dialect};
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.validation, ValidationSection::default());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert_eq!(config.output.sort, "none");
    }

    #[test]
    fn test_partial_document() {
        let config = CliConfig::from_toml_str(
            r#"
            [output]
            sort = "weide"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.sort, "weide");
        assert_eq!(config.output.default_format, "text");
        assert!(config.validation.warnings.is_empty());
    }

    #[test]
    fn test_invalid_document() {
        let err = CliConfig::from_toml_str("[output]\npretty-json = \"yes\"").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_command_line_wins() {
        let config = CliConfig::from_toml_str(
            r#"
            [validation]
            warnings = ["unsorted"]
            order-from = 1
            dialect = "cmudict"
            "#,
        )
        .unwrap();

        let warnings = vec!["no-unsorted".to_string()];
        let overrides = ValidationOverrides {
            warnings: &warnings,
            order_from: None,
            accent: None,
            dialect: Some("cmudict-new"),
        };
        let validation = config.validation_config(&overrides).unwrap();

        assert!(!validation.checks().contains(Check::Unsorted));
        assert_eq!(validation.order_from(), 1);
        assert_eq!(validation.dialect(), Some(Dialect::CmudictNew));
    }

    #[test]
    fn test_invalid_override() {
        let warnings = vec!["bogus".to_string()];
        let overrides = ValidationOverrides {
            warnings: &warnings,
            ..Default::default()
        };
        let err = CliConfig::default()
            .validation_config(&overrides)
            .unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Invalid warning: bogus");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cmudict.toml");
        fs::write(&path, "[output]\ndefault-format = \"json\"\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output.default_format, "json");

        let missing = temp_dir.path().join("missing.toml");
        let err = CliConfig::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
