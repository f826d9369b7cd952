//! YAML configuration for bots embedding the finder.
//!
//! One file carries the resolver tuning and the logging setup:
//!
//! ```yaml
//! # Finder configuration
//! version: "1.0"
//! name: "moderation bot"
//!
//! resolver:
//!   prefer_cluster: true
//!   max_results: 25
//!
//! logging:
//!   level: "info"
//!   json: false
//! ```
//!
//! Every section is optional; missing fields take the defaults shown by
//! [`FinderConfig::default`].

use std::fs;
use std::path::Path;

use resolver::ResolverConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FinderConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub resolver: ResolverYamlConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FinderConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: FinderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.resolver.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Resolver settings in the form [`resolver::resolve_with`] and
    /// [`resolver::Session::with_config`] take. Already validated on load.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            prefer_cluster: self.resolver.prefer_cluster,
            max_results: self.resolver.max_results,
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            resolver: ResolverYamlConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// `resolver:` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverYamlConfig {
    #[serde(default = "true_value")]
    pub prefer_cluster: bool,

    #[serde(default)]
    pub max_results: Option<usize>,
}

impl ResolverYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.max_results == Some(0) {
            return Err(ConfigLoadError::Validation(
                "resolver.max_results must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ResolverYamlConfig {
    fn default() -> Self {
        Self {
            prefer_cluster: true,
            max_results: None,
        }
    }
}

/// `logging:` section, consumed by [`init_tracing`](crate::init_tracing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" | "off" => Ok(()),
            other => Err(ConfigLoadError::Validation(format!(
                "logging.level must be one of trace, debug, info, warn, error, off (got {other:?})"
            ))),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

// Helper functions for serde defaults
fn true_value() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}
