//! Business logic services
//!
//! - [`report_parser`] - Turn report lines into a [`PortStatus`](crate::core::models::PortStatus)
//! - [`restart_policy`] - Decide whether a port may be restarted
//! - [`checker`] - Parse a [`ReportSource`](crate::core::ports::ReportSource) and decide

pub mod checker;
pub mod report_parser;
pub mod restart_policy;

pub use checker::{PortCheck, check_source};
pub use report_parser::{ReportScan, parse_lines, parse_report, parse_source};
pub use restart_policy::{RestartPolicy, evaluate};
