//! In-memory adapters for development and testing.

mod credit_store;
mod identity;
mod notifier;

pub use credit_store::InMemoryCreditStore;
pub use identity::FixedIdentity;
pub use notifier::{RecordedNotice, RecordingNotifier};
