//! Per-user daily credit ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

use super::{ActionKind, SubscriptionTier};

/// Units consumed today, broken down by action kind.
///
/// Counters are monotonically non-decreasing within a day and reset to
/// zero exactly once per calendar-day rollover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumption {
    pub reply: u32,
    pub deep_thought: u32,
    pub voice_reply: u32,
    pub media_generation: u32,
}

impl Consumption {
    /// Units consumed for one action kind.
    pub fn of(&self, kind: ActionKind) -> u32 {
        match kind {
            ActionKind::Reply => self.reply,
            ActionKind::DeepThought => self.deep_thought,
            ActionKind::VoiceReply => self.voice_reply,
            ActionKind::MediaGeneration => self.media_generation,
        }
    }

    /// Adds units to one action kind's counter.
    pub fn add(&mut self, kind: ActionKind, units: u32) {
        let counter = match kind {
            ActionKind::Reply => &mut self.reply,
            ActionKind::DeepThought => &mut self.deep_thought,
            ActionKind::VoiceReply => &mut self.voice_reply,
            ActionKind::MediaGeneration => &mut self.media_generation,
        };
        *counter = counter.saturating_add(units);
    }

    /// Total units consumed across all action kinds.
    pub fn total(&self) -> u32 {
        self.reply + self.deep_thought + self.voice_reply + self.media_generation
    }
}

/// A user's daily credit account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAccount {
    /// Owner of this ledger.
    pub user_id: UserId,
    /// Subscription tier the quotas come from.
    pub tier: SubscriptionTier,
    /// Units consumed today, per action kind.
    pub consumed: Consumption,
    /// Calendar day the counters were last reset (not a timestamp).
    pub last_reset_date: NaiveDate,
    /// Whether the account is on a paid plan.
    pub premium: bool,
    /// Whether today's single grace reply has been spent.
    pub grace_used: bool,
}

impl CreditAccount {
    /// Creates a fresh account seeded at the given tier with zero consumption.
    pub fn new(user_id: UserId, tier: SubscriptionTier, today: NaiveDate) -> Self {
        Self {
            user_id,
            tier,
            consumed: Consumption::default(),
            last_reset_date: today,
            premium: tier.is_paid(),
            grace_used: false,
        }
    }

    /// Zeroes the counters if the stored date is not today.
    ///
    /// Idempotent; must run before every read or write of the ledger.
    /// Returns true if a rollover occurred.
    pub fn reset_if_stale(&mut self, today: NaiveDate) -> bool {
        if self.last_reset_date == today {
            return false;
        }
        self.consumed = Consumption::default();
        self.grace_used = false;
        self.last_reset_date = today;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn test_account(today: NaiveDate) -> CreditAccount {
        CreditAccount::new(UserId::new("user-1").unwrap(), SubscriptionTier::Free, today)
    }

    #[test]
    fn new_account_starts_at_zero() {
        let account = test_account(day("2025-06-01"));
        assert_eq!(account.consumed.total(), 0);
        assert!(!account.grace_used);
        assert!(!account.premium);
    }

    #[test]
    fn paid_tier_sets_premium_flag() {
        let account = CreditAccount::new(
            UserId::new("user-1").unwrap(),
            SubscriptionTier::Plus,
            day("2025-06-01"),
        );
        assert!(account.premium);
    }

    #[test]
    fn consumption_tracks_per_kind() {
        let mut consumed = Consumption::default();
        consumed.add(ActionKind::Reply, 1);
        consumed.add(ActionKind::Reply, 1);
        consumed.add(ActionKind::VoiceReply, 2);

        assert_eq!(consumed.of(ActionKind::Reply), 2);
        assert_eq!(consumed.of(ActionKind::VoiceReply), 2);
        assert_eq!(consumed.of(ActionKind::DeepThought), 0);
        assert_eq!(consumed.total(), 4);
    }

    #[test]
    fn reset_is_noop_on_same_day() {
        let today = day("2025-06-01");
        let mut account = test_account(today);
        account.consumed.add(ActionKind::Reply, 5);

        assert!(!account.reset_if_stale(today));
        assert_eq!(account.consumed.of(ActionKind::Reply), 5);
    }

    #[test]
    fn reset_zeroes_counters_on_new_day() {
        let mut account = test_account(day("2025-06-01"));
        account.consumed.add(ActionKind::Reply, 5);
        account.grace_used = true;

        assert!(account.reset_if_stale(day("2025-06-02")));
        assert_eq!(account.consumed.total(), 0);
        assert!(!account.grace_used);
        assert_eq!(account.last_reset_date, day("2025-06-02"));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut account = test_account(day("2025-06-01"));
        account.consumed.add(ActionKind::Reply, 5);

        let tomorrow = day("2025-06-02");
        assert!(account.reset_if_stale(tomorrow));
        account.consumed.add(ActionKind::Reply, 1);
        assert!(!account.reset_if_stale(tomorrow));
        assert_eq!(account.consumed.of(ActionKind::Reply), 1);
    }
}
