//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.

mod clock;
mod credit_store;
mod generation;
mod identity;
mod notifier;

pub use clock::Clock;
pub use credit_store::{CreditStore, CreditStoreError};
pub use generation::{GeneratedReply, GenerationError, GenerationRequest, ReplyGenerator};
pub use identity::IdentityProvider;
pub use notifier::{NoticeKind, Notifier};
