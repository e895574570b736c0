//! portgate - Pre-restart health gate for OLT PON ports
//!
//! Parses a port stats report (optical power, MPCP REQ/ACK counters, slice
//! state) and decides whether an automated restart of the port is safe.
//!
//! ```
//! use portgate::core::services::{evaluate, parse_report};
//!
//! let status = parse_report("PON-Power GOOD\n188 REQ - 180 ACK\nSlice: ONLINE\n");
//! assert!(evaluate(&status).is_allowed());
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use crate::adapters::{FileReport, TextReport};
pub use crate::core::models::{BlockReason, PortStatus, Verdict};
pub use crate::core::services::{PortCheck, RestartPolicy};
pub use crate::error::CheckError;

/// Check a stats file against a restart policy
///
/// # Errors
///
/// Returns [`CheckError::NotFound`] if the file does not exist, or
/// [`CheckError::Io`] if it cannot be read.
pub fn check_file(path: impl AsRef<Path>, policy: &RestartPolicy) -> Result<PortCheck, CheckError> {
    let report = FileReport::open(path)?;
    core::services::check_source(&report, policy)
}
