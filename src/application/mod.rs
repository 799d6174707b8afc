//! Application layer: command handlers and the engine facade.
//!
//! Handlers orchestrate ports and domain logic; the [`CompanionEngine`]
//! facade wires them together from explicit dependencies.

mod engine;
pub mod handlers;
pub mod ledger;

pub use engine::{CompanionEngine, EngineDeps};
pub use handlers::{SendMessageCommand, SendMessageResult};
