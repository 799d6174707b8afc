//! Ledger loading: account fetch, seeding, and daily reset.

use std::sync::Arc;

use tokio::time::{timeout, Duration};

use crate::domain::credits::{CreditAccount, SubscriptionTier};
use crate::domain::foundation::UserId;
use crate::ports::{Clock, CreditStore, CreditStoreError};

/// Loads credit accounts, seeding missing ones and applying the daily
/// reset before anything reads or writes them.
///
/// Store calls are bounded by a short timeout so a hung backend degrades
/// like an unreachable one instead of stalling the conversation.
pub struct LedgerService {
    store: Arc<dyn CreditStore>,
    clock: Arc<dyn Clock>,
    default_tier: SubscriptionTier,
    store_timeout_ms: u64,
}

impl LedgerService {
    pub fn new(
        store: Arc<dyn CreditStore>,
        clock: Arc<dyn Clock>,
        default_tier: SubscriptionTier,
        store_timeout_ms: u64,
    ) -> Self {
        Self {
            store,
            clock,
            default_tier,
            store_timeout_ms,
        }
    }

    /// Today per the injected clock.
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Returns the existing account, or a fresh one seeded at the user's
    /// tier (entry tier when unknown). The daily reset has already been
    /// applied to the returned value; it is not persisted here.
    pub async fn load_or_create(&self, user_id: &UserId) -> Result<CreditAccount, CreditStoreError> {
        let today = self.clock.today();

        let mut account = match self.bounded(self.store.get_account(user_id)).await? {
            Some(account) => account,
            None => {
                let tier = self
                    .bounded(self.store.get_tier(user_id))
                    .await?
                    .unwrap_or(self.default_tier);
                CreditAccount::new(user_id.clone(), tier, today)
            }
        };

        if account.reset_if_stale(today) {
            tracing::debug!(user_id = %user_id, "credit counters rolled over");
        }
        Ok(account)
    }

    /// Persists an account. The only durable effect of a consume; must
    /// be the caller's last step.
    pub async fn persist(&self, account: CreditAccount) -> Result<CreditAccount, CreditStoreError> {
        self.bounded(self.store.upsert_account(account)).await
    }

    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = Result<T, CreditStoreError>>,
    ) -> Result<T, CreditStoreError> {
        match timeout(Duration::from_millis(self.store_timeout_ms), fut).await {
            Ok(result) => result,
            Err(_) => Err(CreditStoreError::Timeout(self.store_timeout_ms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryCreditStore, ManualClock};
    use crate::domain::credits::ActionKind;
    use chrono::NaiveDate;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn service(
        store: Arc<InMemoryCreditStore>,
        clock: Arc<ManualClock>,
    ) -> LedgerService {
        LedgerService::new(store, clock, SubscriptionTier::Free, 250)
    }

    #[tokio::test]
    async fn seeds_missing_account_at_entry_tier() {
        let store = Arc::new(InMemoryCreditStore::new());
        let clock = Arc::new(ManualClock::starting_at(day("2025-06-01")));
        let ledger = service(store, clock);

        let account = ledger.load_or_create(&user()).await.unwrap();
        assert_eq!(account.tier, SubscriptionTier::Free);
        assert_eq!(account.consumed.total(), 0);
        assert_eq!(account.last_reset_date, day("2025-06-01"));
    }

    #[tokio::test]
    async fn seeds_at_registered_tier_when_known() {
        let store = Arc::new(InMemoryCreditStore::new());
        store.set_tier(user(), SubscriptionTier::Plus);
        let clock = Arc::new(ManualClock::starting_at(day("2025-06-01")));
        let ledger = service(store, clock);

        let account = ledger.load_or_create(&user()).await.unwrap();
        assert_eq!(account.tier, SubscriptionTier::Plus);
        assert!(account.premium);
    }

    #[tokio::test]
    async fn applies_daily_reset_on_load() {
        let store = Arc::new(InMemoryCreditStore::new());
        let clock = Arc::new(ManualClock::starting_at(day("2025-06-01")));
        let ledger = service(store.clone(), clock.clone());

        let mut account = ledger.load_or_create(&user()).await.unwrap();
        account.consumed.add(ActionKind::Reply, 10);
        account.grace_used = true;
        ledger.persist(account).await.unwrap();

        clock.advance_days(1);
        let reloaded = ledger.load_or_create(&user()).await.unwrap();
        assert_eq!(reloaded.consumed.total(), 0);
        assert!(!reloaded.grace_used);
        assert_eq!(reloaded.last_reset_date, day("2025-06-02"));
    }

    #[tokio::test]
    async fn same_day_load_keeps_counters() {
        let store = Arc::new(InMemoryCreditStore::new());
        let clock = Arc::new(ManualClock::starting_at(day("2025-06-01")));
        let ledger = service(store, clock);

        let mut account = ledger.load_or_create(&user()).await.unwrap();
        account.consumed.add(ActionKind::Reply, 10);
        ledger.persist(account).await.unwrap();

        let reloaded = ledger.load_or_create(&user()).await.unwrap();
        assert_eq!(reloaded.consumed.of(ActionKind::Reply), 10);
    }

    #[tokio::test]
    async fn outage_surfaces_as_unavailable() {
        let store = Arc::new(InMemoryCreditStore::new());
        store.set_failing(true);
        let clock = Arc::new(ManualClock::starting_at(day("2025-06-01")));
        let ledger = service(store, clock);

        let err = ledger.load_or_create(&user()).await.unwrap_err();
        assert!(matches!(err, CreditStoreError::Unavailable(_)));
    }
}
