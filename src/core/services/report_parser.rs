//! Port stats report parser
//!
//! Reports are free text produced by the OLT. Three kinds of line matter,
//! everything else is skipped:
//!
//! ```text
//!   * Port: NNI-Link UP - PON-Power GOOD
//!   * MpcpPortRegister:  188 REQ - 180 ACK
//!   * Slice: ONLINE depuis 2025-06-15 09:40:45
//! ```
//!
//! Lines may come in any order. A field that never shows up keeps its
//! default, which the restart policy later treats as a failure.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::core::models::PortStatus;
use crate::core::ports::ReportSource;
use crate::error::CheckError;

const POWER_MARKER: &str = "PON-Power";
const REQ_MARKER: &str = "REQ";
const ACK_MARKER: &str = "ACK";
const SLICE_MARKER: &str = "Slice:";

// Literal patterns, compiled once.
static POWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PON-Power\s+(\w+)").expect("valid PON-Power pattern"));
static REQ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+REQ").expect("valid REQ pattern"));
static ACK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+ACK").expect("valid ACK pattern"));
static SLICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Slice:\s+(\w+)").expect("valid Slice pattern"));

/// Line-by-line accumulator for a single report
///
/// Each line is classified into at most one category, tested in order:
/// optical power, then REQ/ACK counters, then slice state.
#[derive(Debug, Default)]
pub struct ReportScan {
    status: PortStatus,
    lines_seen: usize,
}

impl ReportScan {
    /// Start an empty scan
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line of the report
    pub fn feed(&mut self, line: &str) {
        self.lines_seen += 1;

        if line.contains(POWER_MARKER) {
            // A bare marker still claims the line.
            let Some(token) = first_capture(&POWER_RE, line) else {
                return;
            };
            if let Some(previous) = &self.status.pon_power {
                debug!("PON-Power seen again, replacing {previous} with {token}");
            }
            debug!("line {}: PON-Power {token}", self.lines_seen);
            self.status.pon_power = Some(token.to_string());
        } else if line.contains(REQ_MARKER) && line.contains(ACK_MARKER) {
            match (parse_count(&REQ_RE, line), parse_count(&ACK_RE, line)) {
                (Some(req), Some(ack)) => {
                    debug!("line {}: {req} REQ / {ack} ACK", self.lines_seen);
                    self.status.req = req;
                    self.status.ack = ack;
                },
                _ => debug!("line {}: incomplete REQ/ACK counters ignored", self.lines_seen),
            }
        } else if line.contains(SLICE_MARKER)
            && let Some(token) = first_capture(&SLICE_RE, line)
        {
            if let Some(previous) = &self.status.slice_status {
                debug!("Slice seen again, replacing {previous} with {token}");
            }
            debug!("line {}: Slice {token}", self.lines_seen);
            self.status.slice_status = Some(token.to_string());
        }
    }

    /// Number of lines consumed so far
    #[must_use]
    pub const fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Finish the scan and hand back the status
    #[must_use]
    pub fn finish(self) -> PortStatus {
        self.status
    }
}

fn first_capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

fn parse_count(re: &Regex, line: &str) -> Option<u64> {
    first_capture(re, line).and_then(|digits| digits.parse().ok())
}

/// Parse a sequence of report lines
#[must_use]
pub fn parse_lines<I, S>(lines: I) -> PortStatus
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scan = ReportScan::new();
    for line in lines {
        scan.feed(line.as_ref());
    }
    scan.finish()
}

/// Parse a whole report held in memory
#[must_use]
pub fn parse_report(text: &str) -> PortStatus {
    parse_lines(text.lines())
}

/// Stream and parse a report from any source
///
/// # Errors
///
/// Propagates the source's failure to open or read; field problems
/// inside the report never fail.
pub fn parse_source(source: &dyn ReportSource) -> Result<PortStatus, CheckError> {
    let mut scan = ReportScan::new();
    source.for_each_line(&mut |line| scan.feed(line))?;
    debug!("parsed {} line(s) from {}", scan.lines_seen(), source.origin());
    Ok(scan.finish())
}
