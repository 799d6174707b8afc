//! Recording notifier adapter.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{NoticeKind, Notifier};

/// A notice captured by the recording notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Notifier that records notices instead of delivering them.
///
/// Used in tests and the dev harness; production wires the platform's
/// push delivery behind the same port.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<RecordedNotice>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices recorded so far.
    pub fn notices(&self) -> Vec<RecordedNotice> {
        self.notices.lock().unwrap().clone()
    }

    /// Clears recorded notices.
    pub fn clear(&self) {
        self.notices.lock().unwrap().clear();
    }

    /// Number of recorded notices.
    pub fn len(&self) -> usize {
        self.notices.lock().unwrap().len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.notices.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, kind: NoticeKind, message: &str) {
        tracing::debug!(kind = ?kind, message, "notice");
        self.notices.lock().unwrap().push(RecordedNotice {
            kind,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_notices_in_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(NoticeKind::UsageWarning, "80% used").await;
        notifier.notify(NoticeKind::LimitReached, "limit hit").await;

        let notices = notifier.notices();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::UsageWarning);
        assert_eq!(notices[1].message, "limit hit");
    }

    #[tokio::test]
    async fn clear_empties_the_recorder() {
        let notifier = RecordingNotifier::new();
        notifier.notify(NoticeKind::ServiceBusy, "busy").await;
        notifier.clear();
        assert!(notifier.is_empty());
    }
}
