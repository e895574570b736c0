//! File-backed report source
//!
//! Reads a stats dump from disk one line at a time.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::ports::ReportSource;
use crate::error::CheckError;

/// A stats report stored on disk
///
/// Existence is checked when the report is opened, so a missing file is
/// reported before any parsing starts.
#[derive(Debug, Clone)]
pub struct FileReport {
    path: PathBuf,
}

impl FileReport {
    /// Open a report file
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::NotFound`] if nothing exists at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(CheckError::NotFound(path));
        }
        debug!("opened stats report {}", path.display());
        Ok(Self { path })
    }

    /// Path of the report
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> CheckError {
        if source.kind() == io::ErrorKind::NotFound {
            CheckError::NotFound(self.path.clone())
        } else {
            CheckError::Io {
                path: self.path.clone(),
                source,
            }
        }
    }
}

impl ReportSource for FileReport {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn for_each_line(&self, visit: &mut dyn FnMut(&str)) -> Result<(), CheckError> {
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader.read_until(b'\n', &mut buf).map_err(|e| self.io_error(e))?;
            if read == 0 {
                break;
            }
            // Device dumps are not always clean UTF-8.
            let line = String::from_utf8_lossy(&buf);
            visit(line.trim_end_matches(['\n', '\r']));
        }

        Ok(())
    }
}
