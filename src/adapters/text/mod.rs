//! In-memory report source
//!
//! For callers that already hold the report text, and for `-` (stdin)
//! on the command line.

use std::io::Read;

use crate::core::ports::ReportSource;
use crate::error::CheckError;

/// Origin label used for reports read from stdin
pub const STDIN_ORIGIN: &str = "<stdin>";

/// A report held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextReport {
    origin: String,
    text: String,
}

impl TextReport {
    /// Wrap report text, labelled with where it came from
    #[must_use]
    pub fn new(origin: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }

    /// Slurp a report from any reader
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Io`] if the reader fails.
    pub fn from_reader(
        origin: impl Into<String>,
        mut reader: impl Read,
    ) -> Result<Self, CheckError> {
        let origin = origin.into();
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|source| CheckError::Io {
            path: origin.clone().into(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        Ok(Self::new(origin, text))
    }

    /// Read the whole of stdin as a report
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Io`] if stdin cannot be read.
    pub fn stdin() -> Result<Self, CheckError> {
        Self::from_reader(STDIN_ORIGIN, std::io::stdin().lock())
    }

    /// The raw report text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ReportSource for TextReport {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn for_each_line(&self, visit: &mut dyn FnMut(&str)) -> Result<(), CheckError> {
        for line in self.text.lines() {
            visit(line);
        }
        Ok(())
    }
}
