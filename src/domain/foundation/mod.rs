//! Foundation value objects shared across the domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ExchangeId, UserId};
