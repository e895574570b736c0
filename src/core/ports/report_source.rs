//! Report source port
//!
//! Defines the interface for streaming the lines of a port stats report.

use crate::error::CheckError;

/// A place a port stats report can be read from
///
/// Implementations stream lines in order and release any underlying
/// handle before returning, whether the scan succeeded or not.
pub trait ReportSource {
    /// Where the report comes from, for log and error messages
    fn origin(&self) -> String;

    /// Feed every line of the report, in order, to `visit`
    ///
    /// Line terminators are stripped.
    fn for_each_line(&self, visit: &mut dyn FnMut(&str)) -> Result<(), CheckError>;

    /// Collect all lines of the report
    fn read_lines(&self) -> Result<Vec<String>, CheckError> {
        let mut lines = Vec::new();
        self.for_each_line(&mut |line| lines.push(line.to_string()))?;
        Ok(lines)
    }
}
