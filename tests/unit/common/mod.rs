//! Common test utilities
//!
//! - Fixture paths under `tests/fixtures/`
//! - A builder for synthetic stats reports
//! - Mock report sources

use std::cell::Cell;
use std::path::PathBuf;

use portgate::core::ports::ReportSource;
use portgate::error::CheckError;

/// Path to a file under `tests/fixtures/`
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Builder for stats report text in the OLT dump layout
pub struct ReportBuilder {
    power: Option<String>,
    counters: Option<(u64, u64)>,
    slice: Option<String>,
}

impl ReportBuilder {
    /// A healthy port: GOOD, 188 REQ / 180 ACK, ONLINE
    pub fn new() -> Self {
        Self {
            power: Some("GOOD".to_string()),
            counters: Some((188, 180)),
            slice: Some("ONLINE".to_string()),
        }
    }

    pub fn power(mut self, power: &str) -> Self {
        self.power = Some(power.to_string());
        self
    }

    pub fn no_power(mut self) -> Self {
        self.power = None;
        self
    }

    pub fn counters(mut self, req: u64, ack: u64) -> Self {
        self.counters = Some((req, ack));
        self
    }

    pub fn no_counters(mut self) -> Self {
        self.counters = None;
        self
    }

    pub fn slice(mut self, slice: &str) -> Self {
        self.slice = Some(slice.to_string());
        self
    }

    pub fn no_slice(mut self) -> Self {
        self.slice = None;
        self
    }

    pub fn build(self) -> String {
        let mut text = String::from("* Stats:\n");
        if let Some(power) = self.power {
            text.push_str(&format!("  * Port: NNI-Link UP - PON-Power {power}\n"));
        }
        text.push_str("  * Nb clients: 3\n");
        if let Some((req, ack)) = self.counters {
            text.push_str(&format!("  * MpcpPortRegister:  {req} REQ - {ack} ACK\n"));
        }
        if let Some(slice) = self.slice {
            text.push_str(&format!("  * Slice: {slice} depuis 2025-06-15 09:40:45\n"));
        }
        text
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Source whose reads always fail with `NotFound`
pub struct VanishedSource;

impl ReportSource for VanishedSource {
    fn origin(&self) -> String {
        "vanished".to_string()
    }

    fn for_each_line(&self, _visit: &mut dyn FnMut(&str)) -> Result<(), CheckError> {
        Err(CheckError::NotFound(PathBuf::from("vanished")))
    }
}

/// In-memory source that counts how many times it was read
pub struct CountingSource {
    lines: Vec<String>,
    reads: Cell<usize>,
}

impl CountingSource {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl ReportSource for CountingSource {
    fn origin(&self) -> String {
        "counting".to_string()
    }

    fn for_each_line(&self, visit: &mut dyn FnMut(&str)) -> Result<(), CheckError> {
        self.reads.set(self.reads.get() + 1);
        for line in &self.lines {
            visit(line);
        }
        Ok(())
    }
}
