//! CreditStore port - persistence for per-user credit accounts.
//!
//! Implementations may store accounts in PostgreSQL, Redis, or memory.
//! The gate treats a failing store as "usage unknown" and fails open by
//! default rather than blocking conversation.

use async_trait::async_trait;

use crate::domain::credits::{CreditAccount, SubscriptionTier};
use crate::domain::foundation::UserId;

/// Port for reading and writing credit accounts.
#[async_trait]
pub trait CreditStore: Send + Sync {
    /// Fetches a user's account, if one exists.
    async fn get_account(&self, user_id: &UserId) -> Result<Option<CreditAccount>, CreditStoreError>;

    /// Creates or replaces an account, returning the stored value.
    ///
    /// This is the only durable effect of a consume and must be the
    /// caller's last step.
    async fn upsert_account(&self, account: CreditAccount) -> Result<CreditAccount, CreditStoreError>;

    /// Looks up a user's subscription tier, if known.
    async fn get_tier(&self, user_id: &UserId) -> Result<Option<SubscriptionTier>, CreditStoreError>;
}

/// Errors from the credit store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CreditStoreError {
    /// Backing store unreachable or failing.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store did not answer within the configured bound.
    #[error("store timed out after {0}ms")]
    Timeout(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_displays_cause() {
        let err = CreditStoreError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "store unavailable: connection refused");
    }

    #[test]
    fn timeout_error_displays_bound() {
        let err = CreditStoreError::Timeout(250);
        assert_eq!(err.to_string(), "store timed out after 250ms");
    }
}
