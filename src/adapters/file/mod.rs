//! File-based report source
//!
//! Implements `ReportSource` over a stats file dumped from the OLT.

mod report;

pub use report::FileReport;
