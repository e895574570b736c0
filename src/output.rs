//! Output formatting for human and JSON modes
//!
//! A port check renders either as human-readable text or as the flat
//! JSON object the orchestration layer consumes.

use std::io::{self, Write};

use serde::Serialize;

use crate::core::services::PortCheck;
use crate::error::CheckError;

/// Message reported when every restart condition holds
pub const ALLOWED_MESSAGE: &str = "OK - all restart conditions met";

/// Message reported when `check` is run without a stats file
pub const USAGE_MESSAGE: &str = "Usage: portgate check <STATS_FILE>";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of checking one port
///
/// Raw fields are `None` when the check failed before the report was
/// parsed (missing file, bad config).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Whether the restart may proceed
    pub can_restart: bool,
    /// Blocking reason, success message, or error
    pub message: String,
    /// PON optical power token
    pub pon_power: Option<String>,
    /// ACK/REQ ratio in percent
    pub ratio: Option<f64>,
    /// Acknowledged count
    pub ack: Option<u64>,
    /// Requested count
    pub req: Option<u64>,
    /// Slice state token
    pub slice_status: Option<String>,
}

impl From<&PortCheck> for CheckReport {
    fn from(check: &PortCheck) -> Self {
        let status = &check.status;
        Self {
            can_restart: check.can_restart(),
            message: check.verdict.reason().unwrap_or_else(|| ALLOWED_MESSAGE.to_string()),
            pon_power: status.pon_power.clone(),
            ratio: Some(status.ratio()),
            ack: Some(status.ack),
            req: Some(status.req),
            slice_status: status.slice_status.clone(),
        }
    }
}

impl From<&CheckError> for CheckReport {
    fn from(err: &CheckError) -> Self {
        Self::failure(format!("Error: {err}"))
    }
}

impl CheckReport {
    /// A refusal with no report data behind it
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            can_restart: false,
            message: message.into(),
            pon_power: None,
            ratio: None,
            ack: None,
            req: None,
            slice_status: None,
        }
    }

    /// Write the result to `out` based on output mode
    ///
    /// JSON mode writes a single line so callers can parse stdout directly.
    pub fn write(&self, mode: OutputMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => writeln!(out, "{}", self.to_human()),
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            },
        }
    }

    /// Human-readable text for this result
    #[must_use]
    pub fn to_human(&self) -> String {
        let Some(ratio) = self.ratio else {
            return self.message.clone();
        };

        format!(
            "PON-Power: {}\nACK/REQ:   {}/{} ({ratio:.2}%)\nSlice:     {}\n\n{}",
            self.pon_power.as_deref().unwrap_or("-"),
            self.ack.unwrap_or_default(),
            self.req.unwrap_or_default(),
            self.slice_status.as_deref().unwrap_or("-"),
            self.message
        )
    }
}
