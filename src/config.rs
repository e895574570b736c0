//! Configuration loading
//!
//! The restart thresholds can be tuned per deployment from a TOML file:
//!
//! ```toml
//! [policy]
//! required_power = "GOOD"
//! min_ratio = 95.0
//! required_slice = "ONLINE"
//! ```
//!
//! Every key is optional and falls back to the built-in policy.
//! Lookup order: explicit path, then `PORTGATE_CONFIG`, then
//! `~/.portgate/config.toml`, then the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::services::RestartPolicy;
use crate::error::CheckError;
use crate::paths;

/// Top-level portgate configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Restart policy thresholds
    #[serde(default)]
    pub policy: RestartPolicy,
}

impl Config {
    /// Load configuration, following the lookup order
    ///
    /// An explicit path (argument or `PORTGATE_CONFIG`) must exist. The
    /// home directory file is optional.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Config`] if a required file is missing, or any
    /// file found cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CheckError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Some(path) = paths::env_config() {
            return Self::from_file(&path);
        }

        let global = paths::global_config();
        if global.exists() {
            return Self::from_file(&global);
        }

        debug!("no config file, using built-in restart policy");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Config`] if the file is missing, unreadable or
    /// not valid TOML for this schema.
    pub fn from_file(path: &Path) -> Result<Self, CheckError> {
        let content = fs::read_to_string(path).map_err(|e| config_error(path, e.to_string()))?;
        let config = Self::parse(&content).map_err(|e| config_error(path, e))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns the parser message if the text is not valid TOML for this
    /// schema or the ratio threshold is out of range.
    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Self = toml::from_str(content).map_err(|e| e.to_string())?;
        if !(0.0..=100.0).contains(&config.policy.min_ratio) {
            return Err(format!(
                "policy.min_ratio must be between 0 and 100, got {}",
                config.policy.min_ratio
            ));
        }
        Ok(config)
    }
}

fn config_error(path: &Path, message: impl Into<String>) -> CheckError {
    CheckError::Config {
        path: PathBuf::from(path),
        message: message.into(),
    }
}
