//! Adapter configuration
//!
//! Settings are loaded from a TOML document, validated once, and then
//! treated as an immutable value object shared across services via `Arc`.
//! The only hard invariant is that `view` must be non-empty; everything
//! else has a usable default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `view` is required and must be non-empty
    #[error("configuration is missing the required `view` setting")]
    MissingView,

    /// IO error reading the configuration file
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or shape error
    #[error("cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Perforce adapter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct P4Config {
    /// Path or name of the Perforce binary
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Depot view selecting the paths in scope for change detection
    #[serde(default)]
    pub view: String,

    /// Client workspace name (`-c`)
    #[serde(default)]
    pub client: Option<String>,

    /// User name (`-u`)
    #[serde(default)]
    pub user: Option<String>,

    /// Server address (`-p`)
    #[serde(default)]
    pub port: Option<String>,

    /// Directory the tool runs in; the caller-supplied fallback is used
    /// when this is unset or empty
    #[serde(default)]
    pub working_directory: Option<String>,

    /// Sync the workspace before each build
    #[serde(default)]
    pub auto_get_source: bool,

    /// Stamp a label after each successful build
    #[serde(default)]
    pub apply_label: bool,
}

fn default_executable() -> String {
    "p4".to_string()
}

impl P4Config {
    /// Create a configuration for the given view with defaults elsewhere
    #[must_use]
    pub fn new(view: impl Into<String>) -> Self {
        Self {
            executable: default_executable(),
            view: view.into(),
            client: None,
            user: None,
            port: None,
            working_directory: None,
            auto_get_source: false,
            apply_label: false,
        }
    }

    /// Load and validate a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde defaults cannot express
    ///
    /// Fails fast, before any process is spawned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.trim().is_empty() {
            return Err(ConfigError::MissingView);
        }
        Ok(())
    }

    /// Directory the adapter should operate in
    ///
    /// The configured working directory when set and non-empty, otherwise
    /// the supplied fallback.
    #[must_use]
    pub fn effective_working_directory<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.working_directory.as_deref() {
            Some(dir) if !dir.trim().is_empty() => dir,
            _ => fallback,
        }
    }
}
