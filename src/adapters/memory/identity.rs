//! Fixed identity adapter.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::ports::IdentityProvider;

/// Identity provider pinned to one user, or to nobody.
///
/// Stands in for the real session-backed identity in tests and the dev
/// harness.
#[derive(Debug, Clone, Default)]
pub struct FixedIdentity {
    user_id: Option<UserId>,
}

impl FixedIdentity {
    /// Identity resolving to the given user.
    pub fn signed_in(user_id: UserId) -> Self {
        Self { user_id: Some(user_id) }
    }

    /// Identity resolving to no user.
    pub fn signed_out() -> Self {
        Self { user_id: None }
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentity {
    async fn current_user_id(&self) -> Option<UserId> {
        self.user_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn signed_in_identity_returns_user() {
        let identity = FixedIdentity::signed_in(UserId::new("user-7").unwrap());
        assert_eq!(
            identity.current_user_id().await,
            Some(UserId::new("user-7").unwrap())
        );
    }

    #[tokio::test]
    async fn signed_out_identity_returns_none() {
        assert_eq!(FixedIdentity::signed_out().current_user_id().await, None);
    }
}
