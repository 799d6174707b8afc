//! Property tests over the pure credit domain.

use chrono::NaiveDate;
use proptest::prelude::*;

use companion_core::domain::credits::{
    ActionKind, CreditAccount, CreditGate, CreditVerdict, Quota, SubscriptionTier,
    SOFT_WARNING_PERCENT,
};
use companion_core::domain::foundation::UserId;

fn account(tier: SubscriptionTier) -> CreditAccount {
    let day: NaiveDate = "2025-06-01".parse().unwrap();
    CreditAccount::new(UserId::new("user-1").unwrap(), tier, day)
}

fn any_action() -> impl Strategy<Value = ActionKind> {
    prop::sample::select(ActionKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn forbidden_quota_never_permits(consumed in 0u32..10_000) {
        prop_assert!(!Quota::Forbidden.permits(consumed));
    }

    #[test]
    fn unlimited_quota_always_permits(consumed in 0u32..10_000) {
        prop_assert!(Quota::Unlimited.permits(consumed));
    }

    #[test]
    fn limited_quota_permits_iff_under_cap(cap in 1u32..1_000, consumed in 0u32..2_000) {
        prop_assert_eq!(Quota::Limited(cap).permits(consumed), consumed < cap);
    }

    #[test]
    fn usage_percent_stays_within_bounds(
        cap in 1u32..1_000,
        consumed in 0u32..5_000,
        grace_used in any::<bool>(),
    ) {
        let v = CreditVerdict::from_usage(consumed, Quota::Limited(cap), grace_used);
        prop_assert!(v.usage_percent <= 100);
    }

    #[test]
    fn usage_percent_is_monotonic_in_consumption(
        cap in 1u32..1_000,
        consumed in 0u32..2_000,
        extra in 0u32..500,
    ) {
        let before = CreditVerdict::from_usage(consumed, Quota::Limited(cap), false);
        let after = CreditVerdict::from_usage(consumed + extra, Quota::Limited(cap), false);
        prop_assert!(after.usage_percent >= before.usage_percent);
    }

    #[test]
    fn soft_warning_matches_its_band(cap in 1u32..1_000, consumed in 0u32..2_000) {
        let v = CreditVerdict::from_usage(consumed, Quota::Limited(cap), false);
        let in_band = v.usage_percent >= SOFT_WARNING_PERCENT && v.usage_percent < 100;
        prop_assert_eq!(v.show_soft_warning, in_band);
    }

    #[test]
    fn grace_spent_means_limit_blocks(cap in 1u32..1_000, over in 0u32..500) {
        let v = CreditVerdict::from_usage(cap + over, Quota::Limited(cap), true);
        prop_assert!(!v.can_proceed);
        prop_assert!(!v.allow_final_reply);
    }

    #[test]
    fn unlimited_tier_never_denies(actions in prop::collection::vec(any_action(), 0..100)) {
        let gate = CreditGate::default();
        let mut acct = account(SubscriptionTier::Unlimited);
        for kind in actions {
            prop_assert!(gate.consume(&mut acct, kind).is_ok());
        }
    }

    #[test]
    fn free_tier_admits_at_most_quota_plus_one_reply(attempts in 0u32..60) {
        let gate = CreditGate::default();
        let mut acct = account(SubscriptionTier::Free);
        let mut admitted = 0u32;
        let mut via_grace = 0u32;

        for _ in 0..attempts {
            match gate.consume(&mut acct, ActionKind::Reply) {
                Ok(receipt) => {
                    admitted += 1;
                    if receipt.via_grace {
                        via_grace += 1;
                    }
                }
                Err(_) => {}
            }
        }

        prop_assert!(admitted <= 26);
        prop_assert!(via_grace <= 1);
        prop_assert_eq!(acct.consumed.of(ActionKind::Reply), admitted);
    }

    #[test]
    fn rollover_clears_counters_and_grace(
        consumed in 0u32..100,
        grace_used in any::<bool>(),
        days_later in 1i64..365,
    ) {
        let mut acct = account(SubscriptionTier::Free);
        acct.consumed.add(ActionKind::Reply, consumed);
        acct.grace_used = grace_used;

        let later = acct.last_reset_date + chrono::Duration::days(days_later);
        prop_assert!(acct.reset_if_stale(later));
        prop_assert_eq!(acct.consumed.total(), 0);
        prop_assert!(!acct.grace_used);
        prop_assert_eq!(acct.last_reset_date, later);
    }

    #[test]
    fn same_day_reset_is_a_no_op(consumed in 0u32..100) {
        let mut acct = account(SubscriptionTier::Free);
        acct.consumed.add(ActionKind::Reply, consumed);

        let today = acct.last_reset_date;
        prop_assert!(!acct.reset_if_stale(today));
        prop_assert_eq!(acct.consumed.of(ActionKind::Reply), consumed);
    }
}
