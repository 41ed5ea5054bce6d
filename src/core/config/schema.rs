//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing. Labels must be non-empty and
//! fit on one line, since each one prefixes exactly one report line.

use serde::Deserialize;

use super::ConfigError;

/// Pipeline configuration.
///
/// # Example
///
/// ```toml
/// numbers = [10, 11, 12, -4]
///
/// [labels]
/// original = "Input"
/// total = "Total"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Replacement input sequence
    pub numbers: Option<Vec<i64>>,

    /// Report line prefixes
    pub labels: Option<LabelsConfig>,
}

impl PipelineConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(labels) = &self.labels {
            labels.validate()?;
        }
        Ok(())
    }
}

/// Overrides for the four report line prefixes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    /// Prefix for the input sequence line
    pub original: Option<String>,

    /// Prefix for the even-filtered line
    pub evens: Option<String>,

    /// Prefix for the squared line
    pub squared: Option<String>,

    /// Prefix for the total line
    pub total: Option<String>,
}

impl LabelsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let entries = [
            ("original", &self.original),
            ("evens", &self.evens),
            ("squared", &self.squared),
            ("total", &self.total),
        ];
        for (key, value) in entries {
            let Some(value) = value else { continue };
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "label '{}' must not be empty",
                    key
                )));
            }
            if value.contains('\n') || value.contains('\r') {
                return Err(ConfigError::InvalidValue(format!(
                    "label '{}' must be a single line",
                    key
                )));
            }
        }
        Ok(())
    }
}
