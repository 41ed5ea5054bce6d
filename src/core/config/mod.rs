//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Configuration is optional. With no config file the pipeline runs over the
//! built-in input and prints the standard labels.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. `$EVENSUM_CONFIG` if set
//! 3. `--config <PATH>` (handled by the caller, passed in as `explicit`)
//!
//! Only one file is read. A path named by `--config` must exist; a path
//! named by `$EVENSUM_CONFIG` that does not exist produces a warning and
//! falls back to defaults.
//!
//! # Example
//!
//! ```no_run
//! use evensum::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("evensum.toml"))).unwrap();
//! let config = result.config;
//!
//! println!("{}", config.labels().original);
//! if let Some(numbers) = config.numbers() {
//!     println!("custom input: {:?}", numbers);
//! }
//! ```

pub mod schema;

pub use schema::{LabelsConfig, PipelineConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::pipeline::Labels;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "EVENSUM_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (defaults if no file was read)
    pub pipeline: PipelineConfig,
    /// Path the config was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// `explicit` is the `--config` path, if given. Otherwise
    /// `$EVENSUM_CONFIG` is consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path does not exist, or if the file
    /// that is read cannot be parsed or fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit, env_path.as_deref())
    }

    /// Load configuration from an explicit path or an environment-supplied
    /// path, without reading the environment.
    pub fn load_from(
        explicit: Option<&Path>,
        env_path: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let path = match (explicit, env_path) {
            (Some(path), _) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Some(path.to_path_buf())
            }
            (None, Some(path)) => {
                if path.exists() {
                    Some(path.to_path_buf())
                } else {
                    warnings.push(ConfigWarning {
                        message: format!("{} points to a missing file, using defaults", CONFIG_ENV),
                        path: path.to_path_buf(),
                    });
                    None
                }
            }
            (None, None) => None,
        };

        let pipeline = match &path {
            Some(path) => Self::read_config(path)?,
            None => PipelineConfig::default(),
        };
        pipeline.validate()?;

        Ok(ConfigLoadResult {
            config: Config { pipeline, path },
            warnings,
        })
    }

    fn read_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Replacement input sequence, if configured.
    pub fn numbers(&self) -> Option<&[i64]> {
        self.pipeline.numbers.as_deref()
    }

    /// Report labels with configured overrides applied.
    pub fn labels(&self) -> Labels {
        let mut labels = Labels::default();
        if let Some(custom) = &self.pipeline.labels {
            if let Some(v) = &custom.original {
                labels.original = v.clone();
            }
            if let Some(v) = &custom.evens {
                labels.evens = v.clone();
            }
            if let Some(v) = &custom.squared {
                labels.squared = v.clone();
            }
            if let Some(v) = &custom.total {
                labels.total = v.clone();
            }
        }
        labels
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
