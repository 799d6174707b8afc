//! Adapters - implementations of the ports.

mod clock;
pub mod generation;
pub mod memory;

pub use clock::{ManualClock, SystemClock};
pub use generation::MockReplyGenerator;
pub use memory::{FixedIdentity, InMemoryCreditStore, RecordedNotice, RecordingNotifier};
