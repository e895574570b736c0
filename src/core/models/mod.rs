//! Domain models for portgate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`PortStatus`] - Signals read from a port stats report
//! - [`Verdict`] - Allow, or deny with the first [`BlockReason`]

mod port_status;
mod verdict;

pub use port_status::PortStatus;
pub use verdict::{BlockReason, Verdict};
