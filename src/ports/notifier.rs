//! Notification port - fire-and-forget user notices.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Class of notice being surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Usage entered the soft-warning band.
    UsageWarning,
    /// The daily limit was reached.
    LimitReached,
    /// The generation collaborator is rate limiting us.
    ServiceBusy,
    /// The generation collaborator reported a billing problem.
    PaymentRequired,
}

/// Port for delivering notices to the user.
///
/// Fire-and-forget: delivery failures are the adapter's concern and are
/// never surfaced back into the admission path.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, kind: NoticeKind, message: &str);
}
