//! Service configuration via `search.toml`
//!
//! A default `search.toml` can be written next to the application's other
//! configuration. To change settings, edit the file and restart.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vufind_search_core::{Error, Result};

use crate::command::ReexecutionPolicy;
use crate::commands::DEFAULT_LIMIT;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "search.toml";

/// Dispatcher configuration loaded from `search.toml`.
///
/// # Example
///
/// ```toml
/// # Page size used by the Service convenience methods
/// default_limit = 20
///
/// # "reject" (default) or "overwrite"
/// reexecution = "reject"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Page size for `Service::search`, `Service::random` and `Service::get_ids`.
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    /// What the Service does with a command that already ran.
    #[serde(default)]
    pub reexecution: ReexecutionPolicy,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            reexecution: ReexecutionPolicy::default(),
        }
    }
}

impl ServiceConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `default_limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(Error::invalid_config(
                "default_limit must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# VuFind search service configuration
#
# Page size used by the Service convenience methods (search, random, get_ids).
default_limit = 20

# What to do when a command that already ran is dispatched again:
#   "reject"    = fail with AlreadyExecuted and keep the first result
#   "overwrite" = run again and replace the stored result
reexecution = "reject"
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: ServiceConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            Error::InvalidConfig { reason } => {
                Error::invalid_config(format!("{} ({})", reason, path.display()))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::invalid_config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
