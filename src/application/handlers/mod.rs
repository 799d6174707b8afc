//! Command handlers, one per engine operation.

mod check_warning;
mod evaluate_credits;
mod route_message;
mod send_message;
mod try_consume;

pub use check_warning::CheckWarningHandler;
pub use evaluate_credits::EvaluateCreditsHandler;
pub use route_message::RouteMessageHandler;
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
pub use try_consume::TryConsumeHandler;
