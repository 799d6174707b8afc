//! EvaluateCreditsHandler - Compute the admission verdict for a user.

use std::sync::Arc;

use crate::application::ledger::LedgerService;
use crate::domain::credits::{CreditGate, CreditVerdict};
use crate::domain::foundation::UserId;

/// Handler for the `evaluate` operation.
///
/// Read-only: loads the account (seeding and resetting as needed) and
/// derives a verdict against the primary reply quota. When the store is
/// unreachable, usage is unknown and the verdict follows the configured
/// failure policy — open by default, so a transient outage never blocks
/// conversation.
pub struct EvaluateCreditsHandler {
    ledger: Arc<LedgerService>,
    gate: Arc<CreditGate>,
    fail_closed: bool,
}

impl EvaluateCreditsHandler {
    pub fn new(ledger: Arc<LedgerService>, gate: Arc<CreditGate>, fail_closed: bool) -> Self {
        Self { ledger, gate, fail_closed }
    }

    pub async fn handle(&self, user_id: &UserId) -> CreditVerdict {
        match self.ledger.load_or_create(user_id).await {
            Ok(account) => self.gate.evaluate(&account),
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "account unavailable during evaluate");
                if self.fail_closed {
                    CreditVerdict::fail_closed()
                } else {
                    CreditVerdict::fail_open()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryCreditStore, ManualClock};
    use crate::domain::credits::{ActionKind, CreditAccount, SubscriptionTier};
    use crate::ports::CreditStore;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn handler(store: Arc<InMemoryCreditStore>, fail_closed: bool) -> EvaluateCreditsHandler {
        let clock = Arc::new(ManualClock::starting_at(day("2025-06-01")));
        let ledger = Arc::new(LedgerService::new(
            store,
            clock,
            SubscriptionTier::Free,
            250,
        ));
        EvaluateCreditsHandler::new(ledger, Arc::new(CreditGate::default()), fail_closed)
    }

    #[tokio::test]
    async fn fresh_user_gets_zero_usage_verdict() {
        let store = Arc::new(InMemoryCreditStore::new());
        let verdict = handler(store, false).handle(&user()).await;

        assert_eq!(verdict.usage_percent, 0);
        assert!(verdict.can_proceed);
    }

    #[tokio::test]
    async fn consumed_account_reflects_usage() {
        let store = Arc::new(InMemoryCreditStore::new());
        let mut account =
            CreditAccount::new(user(), SubscriptionTier::Free, day("2025-06-01"));
        account.consumed.add(ActionKind::Reply, 20);
        store.upsert_account(account).await.unwrap();

        let verdict = handler(store, false).handle(&user()).await;
        assert_eq!(verdict.usage_percent, 80);
        assert!(verdict.show_soft_warning);
    }

    #[tokio::test]
    async fn outage_fails_open_by_default() {
        let store = Arc::new(InMemoryCreditStore::new());
        store.set_failing(true);

        let verdict = handler(store, false).handle(&user()).await;
        assert!(verdict.can_proceed);
        assert_eq!(verdict.usage_percent, 0);
    }

    #[tokio::test]
    async fn outage_blocks_when_configured_fail_closed() {
        let store = Arc::new(InMemoryCreditStore::new());
        store.set_failing(true);

        let verdict = handler(store, true).handle(&user()).await;
        assert!(!verdict.can_proceed);
    }
}
