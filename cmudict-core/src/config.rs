//! Validation configuration

use crate::check::CheckSet;
use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::phoneme::Accent;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// First expected context position for each word
    pub const ORDER_FROM: u32 = 0;
}

/// Settings for one validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    pub(crate) checks: CheckSet,
    pub(crate) order_from: u32,
    pub(crate) accent: Option<Accent>,
    pub(crate) dialect: Option<Dialect>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            checks: CheckSet::default(),
            order_from: defaults::ORDER_FROM,
            accent: None,
            dialect: None,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration builder
    pub fn builder() -> ValidationConfigBuilder {
        ValidationConfigBuilder::default()
    }

    /// Enabled checks
    pub fn checks(&self) -> CheckSet {
        self.checks
    }

    /// First expected context position for each word
    pub fn order_from(&self) -> u32 {
        self.order_from
    }

    /// Accent overriding the input dialect's phoneme spelling
    pub fn accent(&self) -> Option<Accent> {
        self.accent
    }

    /// Input dialect fixed by the caller
    pub fn dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    /// Read the `[validation]` table of a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct Document {
            #[serde(default)]
            validation: ValidationSection,
        }

        let document: Document =
            toml::from_str(text).map_err(|e| Error::Configuration(e.to_string()))?;
        document.validation.into_config()
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(accent) = self.accent {
            if accent.is_ipa() {
                return Err(Error::NotSupported(format!(
                    "parse is not currently supported for IPA phonemes ({accent})"
                )));
            }
        }
        Ok(())
    }
}

/// Fluent builder for [`ValidationConfig`]
///
/// Names are kept as strings until [`build`](Self::build), which reports the
/// first invalid one.
#[derive(Debug, Default)]
pub struct ValidationConfigBuilder {
    warnings: Vec<String>,
    order_from: Option<u32>,
    accent: Option<String>,
    dialect: Option<String>,
}

impl ValidationConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add warning tokens (`all`, `none`, `<check>`, `no-<check>`)
    pub fn warnings<I, S>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings.extend(warnings.into_iter().map(Into::into));
        self
    }

    /// Set the first expected context position
    pub fn order_from(mut self, start: u32) -> Self {
        self.order_from = Some(start);
        self
    }

    /// Override the phoneme accent of the input
    pub fn accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    /// Fix the input dialect instead of detecting it
    pub fn dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ValidationConfig> {
        let mut config = ValidationConfig {
            checks: CheckSet::from_warnings(&self.warnings)?,
            ..ValidationConfig::default()
        };

        if let Some(start) = self.order_from {
            config.order_from = start;
        }

        if let Some(accent) = self.accent {
            config.accent = Some(accent.parse()?);
        }

        if let Some(dialect) = self.dialect {
            config.dialect = Some(dialect.parse()?);
        }

        config.validate()?;
        Ok(config)
    }
}

/// String-typed `[validation]` table as written in configuration files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ValidationSection {
    /// Warning tokens applied over the defaults
    pub warnings: Vec<String>,
    /// First expected context position
    pub order_from: Option<u32>,
    /// Accent override
    pub accent: Option<String>,
    /// Fixed input dialect
    pub dialect: Option<String>,
}

impl ValidationSection {
    /// Validate the section into a [`ValidationConfig`]
    pub fn into_config(self) -> Result<ValidationConfig> {
        let mut builder = ValidationConfig::builder().warnings(self.warnings);
        if let Some(start) = self.order_from {
            builder = builder.order_from(start);
        }
        if let Some(accent) = self.accent {
            builder = builder.accent(accent);
        }
        if let Some(dialect) = self.dialect {
            builder = builder.dialect(dialect);
        }
        builder.build()
    }
}
