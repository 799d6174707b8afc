//! Identity port - who is the current user.

use async_trait::async_trait;

use crate::domain::foundation::UserId;

/// Port for resolving the current user from the ambient session.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, if any.
    async fn current_user_id(&self) -> Option<UserId>;
}
