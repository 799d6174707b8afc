//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Error codes organized by category.
///
/// None of these is fatal to the application: quota and upstream errors
/// degrade to a user-visible notice, store errors degrade to fail-open,
/// and unmatched messages route to the general domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,

    // Admission errors
    QuotaExceeded,
    ActionForbidden,

    // Infrastructure errors
    AccountUnavailable,
    StoreTimeout,

    // Upstream generation errors
    UpstreamRateLimited,
    UpstreamPaymentRequired,
    GenerationFailed,

    // Routing errors
    UnknownDomain,

    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::QuotaExceeded => "QUOTA_EXCEEDED",
            ErrorCode::ActionForbidden => "ACTION_FORBIDDEN",
            ErrorCode::AccountUnavailable => "ACCOUNT_UNAVAILABLE",
            ErrorCode::StoreTimeout => "STORE_TIMEOUT",
            ErrorCode::UpstreamRateLimited => "UPSTREAM_RATE_LIMITED",
            ErrorCode::UpstreamPaymentRequired => "UPSTREAM_PAYMENT_REQUIRED",
            ErrorCode::GenerationFailed => "GENERATION_FAILED",
            ErrorCode::UnknownDomain => "UNKNOWN_DOMAIN",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a quota-exceeded error for an action.
    ///
    /// Surfaced to the user as a soft message, not a hard failure.
    pub fn quota_exceeded(action: impl Into<String>) -> Self {
        Self::new(ErrorCode::QuotaExceeded, "Daily limit reached for this action")
            .with_detail("action", action.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("user_id");
        assert_eq!(format!("{}", err), "Field 'user_id' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("burnout_score", 0, 100, 150);
        assert_eq!(
            format!("{}", err),
            "Field 'burnout_score' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::QuotaExceeded, "Daily limit reached");
        assert_eq!(format!("{}", err), "[QUOTA_EXCEEDED] Daily limit reached");
    }

    #[test]
    fn quota_exceeded_carries_action_detail() {
        let err = DomainError::quota_exceeded("voice_reply");
        assert_eq!(err.code, ErrorCode::QuotaExceeded);
        assert_eq!(err.details.get("action"), Some(&"voice_reply".to_string()));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::AccountUnavailable), "ACCOUNT_UNAVAILABLE");
        assert_eq!(format!("{}", ErrorCode::UnknownDomain), "UNKNOWN_DOMAIN");
    }
}
