//! Errors raised while reading a stats report or loading configuration
//!
//! Missing or malformed fields inside a readable report are not errors;
//! they end up as a denied verdict instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a port check before a verdict can be produced
#[derive(Debug, Error)]
pub enum CheckError {
    /// The stats source does not exist
    #[error("stats file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The stats source exists but could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A policy config file is missing or malformed
    #[error("invalid config {}: {message}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

impl CheckError {
    /// Whether this is the "stats source does not exist" failure
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
