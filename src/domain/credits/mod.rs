//! Credit metering: tiers, quotas, daily ledger, admission gate, and
//! session warning state.

mod account;
mod action;
mod catalog;
mod gate;
mod tier;
mod verdict;
mod warning;

pub use account::{Consumption, CreditAccount};
pub use action::ActionKind;
pub use catalog::{Quota, TierCatalog, TierDefinition, PRODUCT_CATALOG};
pub use gate::{ConsumeReceipt, CreditGate};
pub use tier::SubscriptionTier;
pub use verdict::{CreditVerdict, SOFT_WARNING_PERCENT};
pub use warning::{WarningKind, WarningSessionState};
