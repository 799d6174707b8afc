//! Derived admission verdict for one account.

use serde::{Deserialize, Serialize};

use super::Quota;

/// Usage threshold at which the soft warning band starts.
pub const SOFT_WARNING_PERCENT: u8 = 80;

/// Result of evaluating an account against its primary (reply) quota.
///
/// Derived, never stored: recompute after every consume or rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditVerdict {
    /// Percent of the reply quota consumed, capped at 100.
    pub usage_percent: u8,
    /// True iff usage is at or past the quota.
    pub is_limit_reached: bool,
    /// True iff usage is in `[80, 100)`.
    pub show_soft_warning: bool,
    /// True iff at the limit and the daily grace reply is unspent.
    pub allow_final_reply: bool,
    /// True iff a reply may proceed (under limit, or via grace).
    pub can_proceed: bool,
}

impl CreditVerdict {
    /// Computes a verdict from consumed units, the reply quota, and the
    /// grace flag.
    pub fn from_usage(consumed: u32, quota: Quota, grace_used: bool) -> Self {
        let usage_percent = match quota {
            // No cap: usage pressure is always zero.
            Quota::Unlimited => 0,
            // A forbidden primary quota reads as fully consumed.
            Quota::Forbidden => 100,
            Quota::Limited(max) => {
                let pct = (consumed as u64 * 100) / max.max(1) as u64;
                pct.min(100) as u8
            }
        };

        let is_limit_reached = usage_percent >= 100;
        let show_soft_warning =
            usage_percent >= SOFT_WARNING_PERCENT && usage_percent < 100;
        let allow_final_reply = is_limit_reached && !grace_used;
        let can_proceed = !is_limit_reached || allow_final_reply;

        Self {
            usage_percent,
            is_limit_reached,
            show_soft_warning,
            allow_final_reply,
            can_proceed,
        }
    }

    /// Verdict used when the account cannot be loaded.
    ///
    /// Usage is unknown, so the gate fails open rather than blocking
    /// conversation on a storage outage.
    pub fn fail_open() -> Self {
        Self {
            usage_percent: 0,
            is_limit_reached: false,
            show_soft_warning: false,
            allow_final_reply: false,
            can_proceed: true,
        }
    }

    /// Verdict used when the account cannot be loaded and the engine is
    /// configured to fail closed.
    pub fn fail_closed() -> Self {
        Self {
            usage_percent: 100,
            is_limit_reached: true,
            show_soft_warning: false,
            allow_final_reply: false,
            can_proceed: false,
        }
    }
}
