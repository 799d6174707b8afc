//! TryConsumeHandler - Atomically consume one use of an action.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use tokio::sync::Mutex as AsyncMutex;

use crate::application::ledger::LedgerService;
use crate::domain::credits::{ActionKind, CreditGate};
use crate::domain::foundation::UserId;

/// Handler for the `try_consume` operation.
///
/// The load-check-increment-persist sequence is serialized per user id:
/// two concurrent calls from separate sessions can never both read the
/// pre-increment counter and both pass the quota check, so usage cannot
/// exceed the declared cap (plus the single grace unit). The persist is
/// the last step, so an abandoned request leaves no durable effect.
pub struct TryConsumeHandler {
    ledger: Arc<LedgerService>,
    gate: Arc<CreditGate>,
    fail_closed: bool,
    locks: StdMutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

impl TryConsumeHandler {
    pub fn new(ledger: Arc<LedgerService>, gate: Arc<CreditGate>, fail_closed: bool) -> Self {
        Self {
            ledger,
            gate,
            fail_closed,
            locks: StdMutex::new(HashMap::new()),
        }
    }

    /// Attempts to consume one use of `kind` for the user.
    ///
    /// Returns true when the use was admitted and recorded. A store
    /// outage follows the failure policy: fail-open admits the use
    /// without recording it.
    pub async fn handle(&self, user_id: &UserId, kind: ActionKind) -> bool {
        let lock = self.user_lock(user_id);
        let _guard = lock.lock().await;

        let mut account = match self.ledger.load_or_create(user_id).await {
            Ok(account) => account,
            Err(err) => {
                tracing::warn!(user_id = %user_id, error = %err, "account unavailable during consume");
                return !self.fail_closed;
            }
        };

        let receipt = match self.gate.consume(&mut account, kind) {
            Ok(receipt) => receipt,
            Err(err) => {
                tracing::debug!(user_id = %user_id, action = %kind, error = %err, "consume denied");
                return false;
            }
        };

        if receipt.via_grace {
            tracing::info!(user_id = %user_id, "grace reply consumed");
        }

        match self.ledger.persist(account).await {
            Ok(_) => true,
            Err(err) => {
                // The increment never became durable; admit the use
                // under fail-open, as with an unreadable account.
                tracing::warn!(user_id = %user_id, error = %err, "failed to persist consume");
                !self.fail_closed
            }
        }
    }

    fn user_lock(&self, user_id: &UserId) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks
            .entry(user_id.clone())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}
