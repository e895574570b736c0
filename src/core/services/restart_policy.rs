//! Restart policy
//!
//! Decides whether a port may be restarted. The three conditions are
//! checked in a fixed order and only the first failure is reported:
//!
//! 1. optical power equals the required token (`GOOD`)
//! 2. ACK/REQ ratio is at least the minimum (95%)
//! 3. slice state equals the required token (`ONLINE`)
//!
//! This is pure business logic with no I/O.

use serde::{Deserialize, Serialize};

use crate::core::models::{BlockReason, PortStatus, Verdict};

/// Thresholds a port must meet before it may be restarted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartPolicy {
    /// Optical power token that counts as healthy
    pub required_power: String,
    /// Lowest acceptable ACK/REQ ratio, in percent
    pub min_ratio: f64,
    /// Slice token that counts as in service
    pub required_slice: String,
}

impl Default for RestartPolicy {
    fn default() -> Self {
        Self {
            required_power: "GOOD".to_string(),
            min_ratio: 95.0,
            required_slice: "ONLINE".to_string(),
        }
    }
}

impl RestartPolicy {
    fn power_ok(&self, status: &PortStatus) -> bool {
        status.pon_power.as_deref() == Some(self.required_power.as_str())
    }

    fn ratio_ok(&self, status: &PortStatus) -> bool {
        status.ratio() >= self.min_ratio
    }

    fn slice_ok(&self, status: &PortStatus) -> bool {
        status.slice_status.as_deref() == Some(self.required_slice.as_str())
    }

    /// Whether every condition holds
    #[must_use]
    pub fn allows(&self, status: &PortStatus) -> bool {
        self.power_ok(status) && self.ratio_ok(status) && self.slice_ok(status)
    }

    /// Evaluate a port, reporting the highest-priority failure
    #[must_use]
    pub fn evaluate(&self, status: &PortStatus) -> Verdict {
        if !self.power_ok(status) {
            return Verdict::Deny(BlockReason::OpticalPower {
                observed: status.pon_power.clone(),
            });
        }
        if !self.ratio_ok(status) {
            return Verdict::Deny(BlockReason::LowRatio {
                ratio: status.ratio(),
                minimum: self.min_ratio,
            });
        }
        if !self.slice_ok(status) {
            return Verdict::Deny(BlockReason::Slice {
                observed: status.slice_status.clone(),
            });
        }
        Verdict::Allow
    }
}

/// Evaluate a port against the built-in policy
#[must_use]
pub fn evaluate(status: &PortStatus) -> Verdict {
    RestartPolicy::default().evaluate(status)
}
