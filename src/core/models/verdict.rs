//! Restart verdicts
//!
//! A verdict is either an allow, or a deny carrying the single
//! highest-priority condition that blocked the restart.

use serde::{Serialize, Serializer};

/// Why a restart was refused, in policy priority order
#[derive(Debug, Clone, PartialEq)]
pub enum BlockReason {
    /// Optical power is anything but the required token, including missing
    OpticalPower {
        /// Token read from the report
        observed: Option<String>,
    },
    /// ACK/REQ ratio under the threshold
    LowRatio {
        /// Computed ratio (percent)
        ratio: f64,
        /// Threshold the ratio was held against (percent)
        minimum: f64,
    },
    /// Slice state is anything but the required token, including missing
    Slice {
        /// Token read from the report
        observed: Option<String>,
    },
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpticalPower { observed } => write!(
                f,
                "restart blocked: optical power not good (PON Power {})",
                observed.as_deref().unwrap_or("missing")
            ),
            Self::LowRatio { ratio, minimum } => write!(
                f,
                "restart blocked: ACK/REQ ratio {ratio:.2}% below {minimum:.2}%"
            ),
            Self::Slice { observed } => write!(
                f,
                "restart blocked: slice {} is not online",
                observed.as_deref().unwrap_or("missing")
            ),
        }
    }
}

impl Serialize for BlockReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of evaluating a port against the restart policy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "lowercase")]
pub enum Verdict {
    /// All conditions met
    Allow,
    /// First unmet condition
    Deny(BlockReason),
}

impl Verdict {
    /// Whether the restart may proceed
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The blocking reason, if any
    #[must_use]
    pub const fn block_reason(&self) -> Option<&BlockReason> {
        match self {
            Self::Allow => None,
            Self::Deny(reason) => Some(reason),
        }
    }

    /// The blocking reason rendered as text, if any
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.block_reason().map(ToString::to_string)
    }
}
