//! Port status record
//!
//! The four signals extracted from a port stats report, plus the values
//! derived from them on demand.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::core::services::restart_policy::RestartPolicy;

/// Health signals of a single OLT port, as read from a stats report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortStatus {
    /// PON optical power token (e.g. "GOOD", "FAIL")
    pub pon_power: Option<String>,
    /// MPCP register acknowledgements
    pub ack: u64,
    /// MPCP register requests
    pub req: u64,
    /// Slice state token (e.g. "ONLINE", "OFFLINE")
    pub slice_status: Option<String>,
}

impl PortStatus {
    /// Create a status from already-extracted signals
    #[must_use]
    pub const fn new(
        pon_power: Option<String>,
        ack: u64,
        req: u64,
        slice_status: Option<String>,
    ) -> Self {
        Self {
            pon_power,
            ack,
            req,
            slice_status,
        }
    }

    /// ACK/REQ ratio as a percentage, rounded to 2 decimals
    ///
    /// Zero requests yield `0.0` rather than a division fault.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        if self.req == 0 {
            return 0.0;
        }
        let percent = self.ack as f64 / self.req as f64 * 100.0;
        (percent * 100.0).round() / 100.0
    }

    /// Whether the built-in restart policy allows restarting this port
    #[must_use]
    pub fn can_restart(&self) -> bool {
        RestartPolicy::default().allows(self)
    }

    /// First blocking reason under the built-in restart policy
    #[must_use]
    pub fn block_reason(&self) -> Option<String> {
        RestartPolicy::default().evaluate(self).reason()
    }
}

impl Serialize for PortStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("PortStatus", 7)?;
        s.serialize_field("pon_power", &self.pon_power)?;
        s.serialize_field("ack", &self.ack)?;
        s.serialize_field("req", &self.req)?;
        s.serialize_field("ratio", &self.ratio())?;
        s.serialize_field("slice_status", &self.slice_status)?;
        s.serialize_field("can_restart", &self.can_restart())?;
        s.serialize_field("block_reason", &self.block_reason())?;
        s.end()
    }
}
