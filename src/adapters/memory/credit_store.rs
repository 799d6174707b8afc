//! In-memory credit store implementation.
//!
//! Thread-safe via internal `Mutex`. Suitable for tests and single-server
//! development; production uses a database-backed adapter behind the same
//! port. Carries a switchable failure mode so outage handling (fail-open
//! vs fail-closed) can be exercised without a real storage outage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::credits::{CreditAccount, SubscriptionTier};
use crate::domain::foundation::UserId;
use crate::ports::{CreditStore, CreditStoreError};

/// In-memory implementation of the `CreditStore` port.
#[derive(Default)]
pub struct InMemoryCreditStore {
    accounts: Mutex<HashMap<UserId, CreditAccount>>,
    tiers: Mutex<HashMap<UserId, SubscriptionTier>>,
    failing: AtomicBool,
}

impl InMemoryCreditStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-registers a user's subscription tier.
    pub fn set_tier(&self, user_id: UserId, tier: SubscriptionTier) {
        self.tiers.lock().unwrap().insert(user_id, tier);
    }

    /// Flips the store into (or out of) a simulated outage.
    ///
    /// While failing, every call returns `Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns a snapshot of a stored account.
    ///
    /// Test hook; bypasses the failure switch.
    pub fn account_snapshot(&self, user_id: &UserId) -> Option<CreditAccount> {
        self.accounts.lock().unwrap().get(user_id).cloned()
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    /// True if no accounts are stored.
    pub fn is_empty(&self) -> bool {
        self.accounts.lock().unwrap().is_empty()
    }

    fn check_available(&self) -> Result<(), CreditStoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CreditStoreError::Unavailable("simulated outage".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CreditStore for InMemoryCreditStore {
    async fn get_account(&self, user_id: &UserId) -> Result<Option<CreditAccount>, CreditStoreError> {
        self.check_available()?;
        Ok(self.accounts.lock().unwrap().get(user_id).cloned())
    }

    async fn upsert_account(&self, account: CreditAccount) -> Result<CreditAccount, CreditStoreError> {
        self.check_available()?;
        self.accounts
            .lock()
            .unwrap()
            .insert(account.user_id.clone(), account.clone());
        Ok(account)
    }

    async fn get_tier(&self, user_id: &UserId) -> Result<Option<SubscriptionTier>, CreditStoreError> {
        self.check_available()?;
        Ok(self.tiers.lock().unwrap().get(user_id).copied())
    }
}
