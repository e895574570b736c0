//! Check service - parse a report and evaluate it in one pass
//!
//! Works against the [`ReportSource`] port, so the same flow serves
//! files, stdin and in-memory text.

use log::{info, warn};

use crate::core::models::{PortStatus, Verdict};
use crate::core::ports::ReportSource;
use crate::core::services::report_parser::parse_source;
use crate::core::services::restart_policy::RestartPolicy;
use crate::error::CheckError;

/// A parsed port together with its verdict
#[derive(Debug, Clone, PartialEq)]
pub struct PortCheck {
    /// Signals read from the report
    pub status: PortStatus,
    /// Policy outcome for those signals
    pub verdict: Verdict,
}

impl PortCheck {
    /// Whether the restart may proceed
    #[must_use]
    pub const fn can_restart(&self) -> bool {
        self.verdict.is_allowed()
    }
}

/// Read a report from `source` and evaluate it against `policy`
///
/// # Errors
///
/// Only source failures (missing or unreadable input) are errors. A report
/// with missing fields produces a denied verdict.
pub fn check_source(
    source: &dyn ReportSource,
    policy: &RestartPolicy,
) -> Result<PortCheck, CheckError> {
    let status = parse_source(source)?;
    let verdict = policy.evaluate(&status);

    match verdict.block_reason() {
        None => info!("{}: restart allowed (ratio {:.2}%)", source.origin(), status.ratio()),
        Some(reason) => warn!("{}: {reason}", source.origin()),
    }

    Ok(PortCheck { status, verdict })
}
