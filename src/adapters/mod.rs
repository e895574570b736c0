//! Adapter implementations for port traits
//!
//! This module contains the concrete [`ReportSource`](crate::core::ports::ReportSource)
//! implementations that handle I/O:
//!
//! - `file/` - Stats report on disk
//! - `text/` - Report already in memory, or read from stdin

pub mod file;
pub mod text;

pub use file::FileReport;
pub use text::TextReport;
