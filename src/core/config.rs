//! Tool configuration.
//!
//! Handles reading and creating `config.json`, which holds the defaults
//! threaded into every operation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings loaded from `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path prefix applied when synthesizing parameter references,
    /// e.g. `/preprod/testing/`
    #[serde(default = "default_prefix")]
    pub parameter_prefix: String,
    /// Region used when the command line names none
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_prefix() -> String {
    constants::DEFAULT_PARAMETER_PREFIX.to_string()
}

fn default_region() -> String {
    constants::DEFAULT_REGION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parameter_prefix: default_prefix(),
            region: default_region(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, creating it with defaults if absent.
    ///
    /// Returns the configuration and whether the file was just created.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the JSON is malformed,
    /// `ConfigError::InvalidValue` if a field is unusable, or a
    /// read/write error naming the path.
    pub fn load_or_create(path: &Path) -> Result<(Self, bool)> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            debug!(path = %path.display(), "created default config");
            return Ok((config, true));
        }

        Ok((Self::load(path)?, false))
    }

    /// Load configuration from an existing file
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;

        debug!(
            prefix = %config.parameter_prefix,
            region = %config.region,
            "config loaded"
        );
        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Validate field contents
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank region.
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "region",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Region to use: the explicit override if given, else the configured one
    pub fn resolve_region(&self, flag: Option<&str>) -> String {
        flag.filter(|r| !r.is_empty())
            .unwrap_or(self.region.as_str())
            .to_string()
    }
}
