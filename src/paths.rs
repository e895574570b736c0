//! Centralized path definitions for portgate
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.portgate/
//! └── config.toml               # Restart policy thresholds
//! ```
//!
//! The `PORTGATE_CONFIG` environment variable points at a config file
//! elsewhere and takes precedence over the home directory one.

use std::path::PathBuf;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "PORTGATE_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".portgate";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global portgate directory.
///
/// Returns `~/.portgate/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.portgate/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Config file named by `PORTGATE_CONFIG`, if set and non-empty
#[must_use]
pub fn env_config() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from)
}
