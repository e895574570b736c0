//! Property-based tests for parsing and the restart policy
//!
//! Uses proptest to verify properties that should hold for all inputs.

use portgate::core::models::{BlockReason, PortStatus};
use portgate::core::services::{evaluate, parse_report};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("GOOD".to_string())),
        Just(Some("ONLINE".to_string())),
        "[A-Z]{2,8}".prop_map(Some),
    ]
}

proptest! {
    /// Zero requests never divide by zero
    #[test]
    fn zero_requests_give_zero_ratio(ack in any::<u64>()) {
        let status = PortStatus::new(None, ack, 0, None);
        prop_assert_eq!(status.ratio(), 0.0);
    }

    /// A verdict allows exactly when it carries no reason
    #[test]
    fn allowed_iff_no_reason(
        power in token(),
        ack in 0u64..500,
        req in 0u64..500,
        slice in token(),
    ) {
        let status = PortStatus::new(power, ack, req, slice);
        let verdict = evaluate(&status);
        prop_assert_eq!(verdict.is_allowed(), verdict.block_reason().is_none());
        prop_assert_eq!(status.can_restart(), status.block_reason().is_none());
        prop_assert_eq!(status.can_restart(), verdict.is_allowed());
    }

    /// Bad optical power is always the reported reason, whatever else fails
    #[test]
    fn optical_power_has_priority(
        power in "[A-Z]{2,8}",
        ack in 0u64..500,
        req in 0u64..500,
        slice in token(),
    ) {
        prop_assume!(power != "GOOD");
        let status = PortStatus::new(Some(power), ack, req, slice);
        let is_power_reason = matches!(
            evaluate(&status).block_reason(),
            Some(BlockReason::OpticalPower { .. })
        );
        prop_assert!(is_power_reason);
    }

    /// Ratio stays within [0, 100] when ACK never exceeds REQ
    #[test]
    fn ratio_bounded_for_sane_counters(req in 1u64..1_000_000, frac in 0.0f64..=1.0) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let ack = ((req as f64) * frac) as u64;
        let ratio = PortStatus::new(None, ack.min(req), req, None).ratio();
        prop_assert!((0.0..=100.0).contains(&ratio));
    }

    /// Parsing is a pure function of the text
    #[test]
    fn parse_is_idempotent(text in "(PON-Power [A-Z]{1,6}\n|[0-9]{1,4} REQ - [0-9]{1,4} ACK\n|Slice: [A-Z]{1,6}\n|[a-z ]{0,20}\n){0,8}") {
        prop_assert_eq!(parse_report(&text), parse_report(&text));
    }

    /// Arbitrary noise never panics and never enables a restart on its own
    #[test]
    fn noise_never_allows_restart(text in "[a-z0-9 :\n-]{0,200}") {
        let status = parse_report(&text);
        prop_assert!(!status.can_restart());
    }
}
