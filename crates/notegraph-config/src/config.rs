//! Top-level configuration and TOML loading

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::{GraphConfig, LoggingConfig, SearchConfig};
use crate::{ConfigError, ConfigResult};

/// Complete notegraph configuration
///
/// Every section falls back to its defaults when absent from the file, so an
/// empty TOML document is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotegraphConfig {
    /// Default search narrowing
    pub search: SearchConfig,
    /// Graph layout parameters
    pub graph: GraphConfig,
    /// Logging defaults
    pub logging: LoggingConfig,
}

impl NotegraphConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration, using defaults when the file does not exist
    ///
    /// A file that exists but fails to read or parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: Default::default(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Render this configuration as pretty TOML
    pub fn to_toml_string(&self) -> String {
        // Every field is a plain scalar or table, serialization cannot fail
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Validate all sections
    pub fn validate(&self) -> ConfigResult<()> {
        self.graph.validate()
    }
}
