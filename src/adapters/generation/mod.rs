//! Generation adapters.

mod mock;

pub use mock::MockReplyGenerator;
