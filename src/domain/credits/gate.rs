//! Credit gate: admission decisions against the tier catalog.
//!
//! Pure domain logic. Persistence of the mutated account is the
//! caller's responsibility and must be its last step, so an abandoned
//! request leaves no durable effect.

use crate::domain::foundation::{DomainError, ErrorCode};

use super::{ActionKind, CreditAccount, CreditVerdict, Quota, TierCatalog};

/// Outcome of a successful consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumeReceipt {
    /// The action that was consumed.
    pub kind: ActionKind,
    /// Units added to the counter.
    pub units: u32,
    /// True if this use spent the daily grace reply.
    pub via_grace: bool,
}

/// Evaluates and mutates credit accounts on behalf of one user at a time.
#[derive(Debug, Clone, Default)]
pub struct CreditGate {
    catalog: TierCatalog,
}

impl CreditGate {
    /// Creates a gate over a tier catalog.
    pub fn new(catalog: TierCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this gate decides against.
    pub fn catalog(&self) -> &TierCatalog {
        &self.catalog
    }

    /// Whether the account's tier currently permits one more use of `kind`.
    ///
    /// Forbidden quota is always false; unlimited is always true;
    /// otherwise true iff consumed units are under the cap.
    pub fn is_action_allowed(&self, account: &CreditAccount, kind: ActionKind) -> bool {
        self.catalog
            .definition(account.tier)
            .quota(kind)
            .permits(account.consumed.of(kind))
    }

    /// Computes the verdict for an account, against the primary reply quota.
    pub fn evaluate(&self, account: &CreditAccount) -> CreditVerdict {
        let quota = self.catalog.definition(account.tier).quota(ActionKind::Reply);
        CreditVerdict::from_usage(
            account.consumed.of(ActionKind::Reply),
            quota,
            account.grace_used,
        )
    }

    /// Consumes one use of `kind`, mutating the account's counters.
    ///
    /// Unlimited tiers increment for telemetry and never block. Otherwise
    /// the use must be within quota, or — for the primary reply action —
    /// covered by the one-time daily grace, which this call then spends.
    pub fn consume(
        &self,
        account: &mut CreditAccount,
        kind: ActionKind,
    ) -> Result<ConsumeReceipt, DomainError> {
        let definition = self.catalog.definition(account.tier);
        let cost = definition.cost(kind);

        if account.tier.is_unlimited() {
            account.consumed.add(kind, cost);
            return Ok(ConsumeReceipt { kind, units: cost, via_grace: false });
        }

        if self.is_action_allowed(account, kind) {
            account.consumed.add(kind, cost);
            return Ok(ConsumeReceipt { kind, units: cost, via_grace: false });
        }

        // Grace covers only the primary reply action, once per day.
        if kind == ActionKind::Reply && self.evaluate(account).allow_final_reply {
            account.grace_used = true;
            account.consumed.add(kind, cost);
            return Ok(ConsumeReceipt { kind, units: cost, via_grace: true });
        }

        let code = match definition.quota(kind) {
            Quota::Forbidden => ErrorCode::ActionForbidden,
            _ => ErrorCode::QuotaExceeded,
        };
        Err(DomainError::new(code, "Daily limit reached for this action")
            .with_detail("action", kind.as_str())
            .with_detail("tier", account.tier.display_name()))
    }
}
