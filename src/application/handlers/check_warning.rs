//! CheckWarningHandler - Surface at most one soft and one hard warning per day.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::ledger::LedgerService;
use crate::domain::credits::{CreditGate, WarningKind, WarningSessionState};
use crate::domain::foundation::UserId;
use crate::ports::{NoticeKind, Notifier};

/// Handler for the `check_and_show_warning` operation.
///
/// Owns the ephemeral per-user warning state. Observes the gate's
/// verdict and forwards a fired warning to the notification port.
/// Premium accounts never warn; an unreadable account produces no
/// warning (usage is unknown).
pub struct CheckWarningHandler {
    ledger: Arc<LedgerService>,
    gate: Arc<CreditGate>,
    notifier: Arc<dyn Notifier>,
    enabled: bool,
    states: Mutex<HashMap<UserId, WarningSessionState>>,
}

impl CheckWarningHandler {
    pub fn new(
        ledger: Arc<LedgerService>,
        gate: Arc<CreditGate>,
        notifier: Arc<dyn Notifier>,
        enabled: bool,
    ) -> Self {
        Self {
            ledger,
            gate,
            notifier,
            enabled,
            states: Mutex::new(HashMap::new()),
        }
    }

    pub async fn handle(&self, user_id: &UserId) -> Option<WarningKind> {
        if !self.enabled {
            return None;
        }

        let account = match self.ledger.load_or_create(user_id).await {
            Ok(account) => account,
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "account unavailable during warning check");
                return None;
            }
        };

        let verdict = self.gate.evaluate(&account);
        let today = self.ledger.today();

        let warning = {
            let mut states = self.states.lock().unwrap();
            let state = states
                .entry(user_id.clone())
                .or_insert_with(|| WarningSessionState::new(today));
            state.roll_over_if_stale(today);
            state.observe(&verdict, account.premium)
        };

        match warning {
            Some(WarningKind::Soft) => {
                self.notifier
                    .notify(
                        NoticeKind::UsageWarning,
                        &format!("You've used {}% of today's replies.", verdict.usage_percent),
                    )
                    .await;
            }
            Some(WarningKind::Limit) => {
                self.notifier
                    .notify(
                        NoticeKind::LimitReached,
                        "You've reached today's reply limit. One last reply is on us.",
                    )
                    .await;
            }
            None => {}
        }
        warning
    }

    /// Current consecutive-limit-day streak for a user.
    pub fn consecutive_limit_days(&self, user_id: &UserId) -> u32 {
        self.states
            .lock()
            .unwrap()
            .get(user_id)
            .map(|s| s.consecutive_limit_days)
            .unwrap_or(0)
    }
}
