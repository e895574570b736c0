//! Core domain logic for portgate
//!
//! Parsing and policy are pure; reading a report goes through the
//! [`ReportSource`](ports::ReportSource) port.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`PortStatus`, `Verdict`, `BlockReason`)
//! - `services/` - Report parsing, restart policy, check orchestration
//! - `ports/` - Trait definitions for report sources
pub mod models;
pub mod ports;
pub mod services;
