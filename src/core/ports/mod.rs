//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the pure parsing and policy
//! logic and wherever a stats report actually lives (a file, stdin, a
//! string handed over by an orchestrator).
//!
//! Implementations live in the `adapters` module.

mod report_source;

pub use report_source::ReportSource;
